//! The Airtable client and its table operations.

use crate::common::record::{RecordIds, UpdateRecord};
use crate::common::{RequestArgs, RequestInput};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::transport::{Session, Transport, TransportResponse};
use crate::{read, write};

use reqwest::{Url, blocking, header};
use serde::Serialize;

/// Root of the Airtable REST API.
pub const API_ROOT: &str = "https://api.airtable.com/v0";

/// Client for one Airtable base.
///
/// Holds the connection configuration and a [`Session`] around the transport. The session
/// is released by [`Airtable::close`], at the end of [`Airtable::scoped`], or on drop.
///
/// ```rust,no_run
/// use airtable_crud::{Airtable, Config, TableOperations};
/// use serde_json::json;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::new("appXXXXXXXXXXXXXX", "patXXXXXXXXXXXXXX")
///     .with_schema(["Tasks"])
///     .enforce_schema(true);
/// Airtable::new(config)?.scoped(|airtable| {
///     airtable.create("Tasks", vec![json!({"Name": "Write docs"})])?;
///     let response = airtable.list("Tasks")?;
///     println!("{}", response.text()?);
///     Ok::<_, Box<dyn std::error::Error>>(())
/// })?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Airtable<C: Transport = blocking::Client> {
    authorization: header::HeaderValue,
    base_url: Url,
    config: Config,
    session: Session<C>,
}

impl Airtable<blocking::Client> {
    /// Create a client backed by a pooled [`reqwest::blocking::Client`].
    ///
    /// The blocking client must not be created or used from within an async runtime.
    pub fn new(config: Config) -> Result<Self> {
        let client = blocking::Client::builder().build()?;
        Self::with_transport(config, client)
    }
}

impl<C: Transport> Airtable<C> {
    /// Create a client on top of an existing transport.
    pub fn with_transport(config: Config, transport: C) -> Result<Self> {
        if config.base_id.is_empty() {
            return Err(Error::config("base identifier is empty"));
        }
        let mut authorization =
            header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
        authorization.set_sensitive(true);
        let mut base_url = Url::parse(API_ROOT).map_err(|error| Error::config(error.to_string()))?;
        base_url
            .path_segments_mut()
            .map_err(|()| Error::config("API root cannot be a base URL"))?
            .push(&config.base_id);
        let airtable = Self {
            authorization,
            base_url,
            config,
            session: Session::new(transport),
        };
        Ok(airtable)
    }

    /// The connection configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The session owning the transport.
    pub fn session(&self) -> &Session<C> {
        &self.session
    }

    /// Release the transport.
    pub fn close(mut self) {
        self.session.close();
    }

    /// Run `f` with this client, then release the transport whatever `f` returned.
    pub fn scoped<R, E, F>(mut self, f: F) -> Result<R, E>
    where
        F: FnOnce(&Self) -> Result<R, E>,
    {
        let result = f(&self);
        self.session.close();
        result
    }

    /// Turn a table-scoped request into a transport request.
    ///
    /// The schema check happens here, before anything touches the transport.
    pub(crate) fn build_request(&self, input: RequestInput) -> Result<blocking::Request> {
        self.config
            .schema
            .validate(&input.table_name, self.config.enforce_schema)?;
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::config("API root cannot be a base URL"))?
            .push(&input.table_name);
        if !input.query.is_empty() {
            url.query_pairs_mut().extend_pairs(input.query.iter());
        }
        let mut headers = input.headers;
        headers.insert(header::AUTHORIZATION, self.authorization.clone());
        let mut request = blocking::Request::new(input.method, url);
        *request.headers_mut() = headers;
        if let Some(body) = input.body {
            *request.body_mut() = Some(serde_json::to_vec(&body)?.into());
        }
        *request.timeout_mut() = input.timeout;
        Ok(request)
    }

    /// Build and send one request.
    pub(crate) fn execute(&self, input: RequestInput) -> Result<C::Response> {
        let raise_for_status = input.raise_for_status;
        let request = self.build_request(input)?;
        let url = request.url().clone();
        let response = self.session.transport().execute(request)?;
        let status = response.status();
        if raise_for_status && (status.is_client_error() || status.is_server_error()) {
            return Err(Error::Status { status, url });
        }
        Ok(response)
    }
}

/// One method per HTTP verb, each scoped to a table.
///
/// These use the default batch maximum and no extra request options; the operation
/// structs in [`crate::read`] and [`crate::write`] expose every setting.
pub trait TableOperations {
    /// Raw response type.
    type Response;

    /// `GET` the table.
    fn list(&self, table: &str) -> Result<Self::Response>;

    /// `POST` new records, each given as its fields.
    fn create<R: Serialize>(&self, table: &str, records: Vec<R>) -> Result<Self::Response>;

    /// `PATCH` existing records, leaving unspecified fields untouched.
    fn update<R: Serialize>(
        &self,
        table: &str,
        records: Vec<UpdateRecord<R>>,
    ) -> Result<Self::Response>;

    /// `PUT` existing records, clearing unspecified fields.
    fn replace<R: Serialize>(
        &self,
        table: &str,
        records: Vec<UpdateRecord<R>>,
    ) -> Result<Self::Response>;

    /// `DELETE` records by identifier.
    fn delete(&self, table: &str, ids: impl Into<RecordIds>) -> Result<Self::Response>;

    /// Lazily `GET` each table, or every schema table when `tables` is empty.
    fn dump_tables<S: Into<String>>(
        &self,
        tables: impl IntoIterator<Item = S>,
    ) -> impl Iterator<Item = (String, Result<Self::Response>)>;
}

impl<C: Transport> TableOperations for Airtable<C> {
    type Response = C::Response;

    fn list(&self, table: &str) -> Result<Self::Response> {
        read::list_records::ListRecords {
            read_args: read::common::ReadArgs {
                table_name: table.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
        .send(self)
    }

    fn create<R: Serialize>(&self, table: &str, records: Vec<R>) -> Result<Self::Response> {
        write::create_records::CreateRecords {
            records,
            write_args: write_args(table),
        }
        .send(self)
    }

    fn update<R: Serialize>(
        &self,
        table: &str,
        records: Vec<UpdateRecord<R>>,
    ) -> Result<Self::Response> {
        write::update_records::UpdateRecords {
            records,
            write_args: write_args(table),
        }
        .send(self)
    }

    fn replace<R: Serialize>(
        &self,
        table: &str,
        records: Vec<UpdateRecord<R>>,
    ) -> Result<Self::Response> {
        write::replace_records::ReplaceRecords {
            records,
            write_args: write_args(table),
        }
        .send(self)
    }

    fn delete(&self, table: &str, ids: impl Into<RecordIds>) -> Result<Self::Response> {
        write::delete_records::DeleteRecords {
            ids: ids.into(),
            table_name: table.to_string(),
            ..Default::default()
        }
        .send(self)
    }

    fn dump_tables<S: Into<String>>(
        &self,
        tables: impl IntoIterator<Item = S>,
    ) -> impl Iterator<Item = (String, Result<Self::Response>)> {
        read::dump_tables::DumpTables {
            tables: tables.into_iter().map(Into::into).collect(),
            request_args: RequestArgs::default(),
        }
        .send(self)
    }
}

fn write_args(table: &str) -> write::common::WriteArgs {
    write::common::WriteArgs {
        table_name: table.to_string(),
        ..Default::default()
    }
}
