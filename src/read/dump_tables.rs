use crate::client::Airtable;
use crate::common::RequestArgs;
use crate::error::Result;
use crate::read;
use crate::transport::Transport;

use std::vec;

/// Dump tables operation.
///
/// Reads every listed table, or every schema table when `tables` is empty.
///
/// ```rust,no_run
/// use airtable_crud::{Airtable, read};
///
/// # fn example(airtable: &Airtable) -> Result<(), Box<dyn std::error::Error>> {
/// let dump_tables = read::dump_tables::DumpTables::default();
/// for (table, response) in dump_tables.send(airtable) {
///     println!("{table}: {}", response?.status());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DumpTables {
    /// Tables to read, in order.
    pub tables: Vec<String>,
    /// Pass-through request options, applied to every request.
    pub request_args: RequestArgs,
}

impl DumpTables {
    /// Start the dump.
    ///
    /// Requests are sent one at a time as the returned iterator advances. Calling `send`
    /// again starts over with fresh requests.
    pub fn send<C: Transport>(self, airtable: &Airtable<C>) -> TableDump<'_, C> {
        let tables = match self.tables.is_empty() {
            true => airtable.config().schema.iter().map(str::to_string).collect(),
            false => self.tables,
        };
        TableDump {
            airtable,
            request_args: self.request_args,
            tables: tables.into_iter(),
        }
    }
}

/// Iterator of `(table, response)` pairs produced by [`DumpTables::send`].
#[derive(Debug)]
pub struct TableDump<'a, C: Transport> {
    airtable: &'a Airtable<C>,
    request_args: RequestArgs,
    tables: vec::IntoIter<String>,
}

impl<C: Transport> Iterator for TableDump<'_, C> {
    type Item = (String, Result<C::Response>);

    fn next(&mut self) -> Option<Self::Item> {
        let table_name = self.tables.next()?;
        let response = read::list_records::ListRecords {
            read_args: read::common::ReadArgs {
                table_name: table_name.clone(),
                ..Default::default()
            },
            request_args: self.request_args.clone(),
        }
        .send(self.airtable);
        Some((table_name, response))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tables.size_hint()
    }
}
