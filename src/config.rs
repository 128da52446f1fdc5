//! Connection configuration.

use crate::common::schema::Schema;
use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};
use std::{env, fmt};

/// Environment variable holding the base identifier.
pub const BASE_ID_ENV: &str = "AIRTABLE_BASE_ID";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "AIRTABLE_API_KEY";
/// Environment variable holding a comma-separated list of table names.
pub const SCHEMA_ENV: &str = "AIRTABLE_SCHEMA";
/// Environment variable toggling schema enforcement.
pub const ENFORCE_SCHEMA_ENV: &str = "AIRTABLE_ENFORCE_SCHEMA";

/// Connection settings for one Airtable base.
///
/// ```rust
/// use airtable_crud::Config;
///
/// let config = Config::new("appXXXXXXXXXXXXXX", "patXXXXXXXXXXXXXX")
///     .with_schema(["Tasks", "Projects"])
///     .enforce_schema(true);
/// assert!(config.schema.contains("Tasks"));
/// ```
#[derive(Clone, Deserialize, PartialEq, Serialize)]
pub struct Config {
    /// The base identifier, e.g. `appXXXXXXXXXXXXXX`.
    pub base_id: String,
    /// Personal access token or API key, sent as a bearer token.
    pub api_key: String,
    /// Known table names.
    #[serde(default)]
    pub schema: Schema,
    /// Reject operations on tables missing from a non-empty `schema`.
    #[serde(default)]
    pub enforce_schema: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_id", &self.base_id)
            .field("api_key", &"<redacted>")
            .field("schema", &self.schema)
            .field("enforce_schema", &self.enforce_schema)
            .finish()
    }
}

impl Config {
    /// Create a configuration without a schema.
    pub fn new(base_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_id: base_id.into(),
            api_key: api_key.into(),
            schema: Schema::default(),
            enforce_schema: false,
        }
    }

    /// Set the known table names.
    pub fn with_schema<S: Into<String>>(mut self, tables: impl IntoIterator<Item = S>) -> Self {
        self.schema = tables.into_iter().collect();
        self
    }

    /// Toggle schema enforcement.
    pub fn enforce_schema(mut self, enforce_schema: bool) -> Self {
        self.enforce_schema = enforce_schema;
        self
    }

    /// Read the configuration from `AIRTABLE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::config(format!("{name} is not set")))
        };
        let base_id = required(BASE_ID_ENV)?;
        let api_key = required(API_KEY_ENV)?;
        let schema = lookup(SCHEMA_ENV)
            .map(|tables| {
                tables
                    .split(',')
                    .map(str::trim)
                    .filter(|table| !table.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let enforce_schema = match lookup(ENFORCE_SCHEMA_ENV) {
            Some(value) => parse_flag(&value).ok_or_else(|| {
                Error::config(format!("{ENFORCE_SCHEMA_ENV} has invalid value `{value}`"))
            })?,
            None => false,
        };
        Ok(Self {
            base_id,
            api_key,
            schema,
            enforce_schema,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
