use crate::client::Airtable;
use crate::common::RequestInput;
use crate::common::record::UpdateRecord;
use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::write;

use reqwest::Method;
use serde::Serialize;

/// Replace records operation.
///
/// Sends a `PUT`: fields missing from a record are cleared.
///
/// ```rust,no_run
/// use airtable_crud::{Airtable, common, write};
/// use serde_json::json;
///
/// # fn example(airtable: &Airtable) -> Result<(), Box<dyn std::error::Error>> {
/// let replace_records = write::replace_records::ReplaceRecords {
///     records: vec![common::record::UpdateRecord {
///         id: "recXXXXXXXXXXXXXX".to_string(),
///         fields: json!({"Name": "Write docs"}),
///     }],
///     write_args: write::common::WriteArgs {
///         table_name: "Tasks".to_string(),
///         ..Default::default()
///     },
/// };
/// replace_records.send(airtable)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplaceRecords<T> {
    /// The records to replace.
    pub records: Vec<UpdateRecord<T>>,
    /// Table name, batch maximum and request options.
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<ReplaceRecords<T>> for RequestInput {
    type Error = Error;

    fn try_from(replace_records: ReplaceRecords<T>) -> Result<Self> {
        replace_records
            .write_args
            .into_input(Method::PUT, replace_records.records)
    }
}

impl<T: Serialize> ReplaceRecords<T> {
    /// Execute the replace records operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "airtable_crud.replace_records",
            skip_all,
            fields(table = %self.write_args.table_name, count = self.records.len()),
            err
        )
    )]
    pub fn send<C: Transport>(self, airtable: &Airtable<C>) -> Result<C::Response> {
        let input: RequestInput = self.try_into()?;
        airtable.execute(input)
    }
}
