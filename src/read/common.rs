use serde::{Deserialize, Serialize};

/// Sort direction for a [`Sort`] entry.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Sort on one field.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Sort {
    /// The field to sort on.
    pub field: String,
    /// The direction; Airtable defaults to ascending when omitted.
    pub direction: Option<SortDirection>,
}

/// Arguments for reading a table.
///
/// Every option maps onto an Airtable list query parameter. Only the first page is
/// requested; follow-up pages are the caller's concern.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReadArgs {
    /// Only return these fields (`fields[]`).
    pub fields: Vec<String>,
    /// Formula records must satisfy (`filterByFormula`).
    pub filter_by_formula: Option<String>,
    /// Upper bound on the number of records (`maxRecords`).
    pub max_records: Option<u32>,
    /// Number of records per page (`pageSize`).
    pub page_size: Option<u32>,
    /// Sort order, most significant first (`sort[i][field]`, `sort[i][direction]`).
    pub sort: Vec<Sort>,
    /// The name of the table to read from.
    pub table_name: String,
    /// Name or ID of a view (`view`).
    pub view: Option<String>,
}

/// A table read, with its list options encoded as query pairs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ReadInput {
    pub(crate) query: Vec<(String, String)>,
    pub(crate) table_name: String,
}

impl From<ReadArgs> for ReadInput {
    fn from(read_args: ReadArgs) -> Self {
        let mut query = Vec::with_capacity(read_args.fields.len() + 2 * read_args.sort.len() + 4);
        for field in read_args.fields {
            query.push(("fields[]".to_string(), field));
        }
        if let Some(filter_by_formula) = read_args.filter_by_formula {
            query.push(("filterByFormula".to_string(), filter_by_formula));
        }
        if let Some(max_records) = read_args.max_records {
            query.push(("maxRecords".to_string(), max_records.to_string()));
        }
        if let Some(page_size) = read_args.page_size {
            query.push(("pageSize".to_string(), page_size.to_string()));
        }
        for (index, sort) in read_args.sort.into_iter().enumerate() {
            query.push((format!("sort[{index}][field]"), sort.field));
            if let Some(direction) = sort.direction {
                query.push((
                    format!("sort[{index}][direction]"),
                    direction.as_str().to_string(),
                ));
            }
        }
        if let Some(view) = read_args.view {
            query.push(("view".to_string(), view));
        }
        Self {
            query,
            table_name: read_args.table_name,
        }
    }
}
