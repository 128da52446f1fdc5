//! Write operations for modifying records in Airtable tables.
//!
//! This module provides operations for writing data to Airtable:
//! - Creating new records
//! - Updating records, keeping fields that are not sent
//! - Replacing records, clearing fields that are not sent
//! - Deleting records by identifier
//!
//! Create, update and replace carry between one and [`common::MAX_BATCH_SIZE`] records
//! per request by default; larger or empty batches are rejected before anything is sent.

/// Common utilities and types for write operations.
pub mod common;

/// Create records operation for inserting new records.
pub mod create_records;

/// Delete records operation for removing records by identifier.
pub mod delete_records;

/// Replace records operation for overwriting existing records.
pub mod replace_records;

/// Update records operation for modifying existing records.
pub mod update_records;
