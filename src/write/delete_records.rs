use crate::client::Airtable;
use crate::common::record::RecordIds;
use crate::common::{RequestArgs, RequestInput};
use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::write;

use reqwest::Method;

/// Delete records operation.
///
/// Each identifier becomes one `records[]` query parameter; the request has no body.
/// The batch size is only checked locally when `maximum` is set, otherwise Airtable
/// enforces its own limit.
///
/// ```rust,no_run
/// use airtable_crud::{Airtable, write};
///
/// # fn example(airtable: &Airtable) -> Result<(), Box<dyn std::error::Error>> {
/// let delete_records = write::delete_records::DeleteRecords {
///     ids: ["recXXXXXXXXXXXXX1", "recXXXXXXXXXXXXX2"].into(),
///     table_name: "Tasks".to_string(),
///     ..Default::default()
/// };
/// delete_records.send(airtable)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteRecords {
    /// Identifiers of the records to delete.
    pub ids: RecordIds,
    /// Largest accepted batch. Not checked when `None`.
    pub maximum: Option<usize>,
    /// Pass-through request options.
    pub request_args: RequestArgs,
    /// The name of the table to delete from.
    pub table_name: String,
}

impl TryFrom<DeleteRecords> for RequestInput {
    type Error = Error;

    fn try_from(delete_records: DeleteRecords) -> Result<Self> {
        if let Some(maximum) = delete_records.maximum {
            write::common::validate_batch_size(delete_records.ids.len(), maximum)?;
        }
        let query = delete_records
            .ids
            .0
            .into_iter()
            .map(|id| ("records[]".to_string(), id))
            .collect();
        let input = RequestInput::new(
            Method::DELETE,
            delete_records.table_name,
            delete_records.request_args,
        )
        .with_query(query);
        Ok(input)
    }
}

impl DeleteRecords {
    /// Execute the delete records operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "airtable_crud.delete_records",
            skip_all,
            fields(table = %self.table_name, count = self.ids.len()),
            err
        )
    )]
    pub fn send<C: Transport>(self, airtable: &Airtable<C>) -> Result<C::Response> {
        let input: RequestInput = self.try_into()?;
        airtable.execute(input)
    }
}
