#![deny(missing_docs)]

//! # Airtable CRUD
//!
//! A type-safe, ergonomic interface for performing CRUD operations on Airtable tables.
//!
//! ## Overview
//!
//! This library builds authenticated requests against the Airtable REST API and sends them
//! through a pooled, blocking HTTP session:
//! - Every request carries the `Authorization: Bearer` header
//! - Write batches are checked locally (1 to 10 records by default) before anything is sent
//! - Table names can be checked against a schema, again before anything is sent
//! - Responses are returned as-is; non-success statuses only fail when asked to
//!
//! ## Quick Example
//!
//! ```no_run
//! use airtable_crud::{Airtable, Config, TableOperations, common};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?.with_schema(["Tasks"]).enforce_schema(true);
//! let airtable = Airtable::new(config)?;
//! airtable.create("Tasks", vec![json!({"Name": "A"}), json!({"Name": "B"})])?;
//! airtable.update(
//!     "Tasks",
//!     vec![common::record::UpdateRecord {
//!         id: "recXXXXXXXXXXXXXX".to_string(),
//!         fields: json!({"Status": "Done"}),
//!     }],
//! )?;
//! airtable.delete("Tasks", "recXXXXXXXXXXXXXX")?;
//! // Rejected locally: "Projects" is not part of the schema.
//! assert!(airtable.list("Projects").unwrap_err().is_validation());
//! airtable.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Shared record shapes, schema and request options
//! - [`mod@read`] - Read operations (ListRecords, DumpTables)
//! - [`mod@write`] - Write operations (CreateRecords, UpdateRecords, ReplaceRecords, DeleteRecords)
//!
//! ## Features
//!
//! - `tracing`: wraps every operation in a `tracing` span.

/// The Airtable client and its table operations.
pub mod client;

/// Common utilities for records, schema and request options.
pub mod common;

/// Connection configuration.
pub mod config;

/// Error types.
pub mod error;

/// Read operations for retrieving records from Airtable tables.
///
/// This module provides operations for:
/// - Listing the records of a table
/// - Dumping several tables
pub mod read;

/// HTTP transport and session.
pub mod transport;

/// Write operations for modifying records in Airtable tables.
///
/// This module provides operations for:
/// - Creating records
/// - Updating and replacing records
/// - Deleting records by identifier
pub mod write;

pub use client::{API_ROOT, Airtable, TableOperations};
pub use config::Config;
pub use error::{Error, Result, ValidationError};
pub use transport::{Session, Transport, TransportResponse};
