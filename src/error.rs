//! Error types for Airtable operations.

use reqwest::{StatusCode, Url};
use thiserror::Error;

/// Result type for Airtable operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Local validation failures.
///
/// These are always detected before a request is built, so no request has been sent
/// when one of them is returned.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// The table is not part of the enforced schema.
    #[error("table `{table}` does not exist in the schema")]
    UnknownTable {
        /// The rejected table name.
        table: String,
    },

    /// A write batch is empty or larger than the allowed maximum.
    #[error("batch contains {len} records, expected between 1 and {maximum}")]
    BatchSize {
        /// Number of records in the rejected batch.
        len: usize,
        /// Upper bound that was applied.
        maximum: usize,
    },
}

/// Errors that can occur during Airtable operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation was rejected locally.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The credential cannot be used as an HTTP header value.
    #[error("invalid API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    /// The configuration is incomplete or malformed.
    #[error("configuration error: {reason}")]
    Config {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// Failure reported by the HTTP client.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status, only produced when `raise_for_status` is requested.
    #[error("request to {url} failed with status {status}")]
    Status {
        /// Status returned by Airtable.
        status: StatusCode,
        /// URL of the failed request.
        url: Url,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Whether the error was raised locally, before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The status code of a [`Error::Status`] error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(error) => error.status(),
            _ => None,
        }
    }
}
