//! Read operations for retrieving records from Airtable tables.
//!
//! This module provides operations for reading data from Airtable:
//! - Listing the records of a table
//! - Dumping several tables, one request per table

/// Common utilities and types for read operations.
pub mod common;

/// Dump tables operation for reading several tables in sequence.
pub mod dump_tables;

/// List records operation for reading a table.
pub mod list_records;
