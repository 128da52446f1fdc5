use crate::client::Airtable;
use crate::common::{RequestArgs, RequestInput};
use crate::error::Result;
use crate::read;
use crate::transport::Transport;

use reqwest::Method;

/// List records operation.
///
/// ```rust,no_run
/// use airtable_crud::{Airtable, read};
///
/// # fn example(airtable: &Airtable) -> Result<(), Box<dyn std::error::Error>> {
/// let list_records = read::list_records::ListRecords {
///     read_args: read::common::ReadArgs {
///         table_name: "Tasks".to_string(),
///         filter_by_formula: Some("{Status} = 'Todo'".to_string()),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let response = list_records.send(airtable)?;
/// println!("{}", response.text()?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListRecords {
    /// Table name and list options.
    pub read_args: read::common::ReadArgs,
    /// Pass-through request options.
    pub request_args: RequestArgs,
}

impl From<ListRecords> for RequestInput {
    fn from(list_records: ListRecords) -> Self {
        let read_input: read::common::ReadInput = list_records.read_args.into();
        RequestInput::new(
            Method::GET,
            read_input.table_name,
            list_records.request_args,
        )
        .with_query(read_input.query)
    }
}

impl ListRecords {
    /// Execute the list records operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "airtable_crud.list_records",
            skip_all,
            fields(table = %self.read_args.table_name),
            err
        )
    )]
    pub fn send<C: Transport>(self, airtable: &Airtable<C>) -> Result<C::Response> {
        airtable.execute(self.into())
    }
}
