use crate::client::Airtable;
use crate::common::RequestInput;
use crate::common::record::UpdateRecord;
use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::write;

use reqwest::Method;
use serde::Serialize;

/// Update records operation.
///
/// Sends a `PATCH`: fields missing from a record are left untouched.
///
/// ```rust,no_run
/// use airtable_crud::{Airtable, common, write};
/// use serde_json::json;
///
/// # fn example(airtable: &Airtable) -> Result<(), Box<dyn std::error::Error>> {
/// let update_records = write::update_records::UpdateRecords {
///     records: vec![common::record::UpdateRecord {
///         id: "recXXXXXXXXXXXXXX".to_string(),
///         fields: json!({"Status": "Done"}),
///     }],
///     write_args: write::common::WriteArgs {
///         table_name: "Tasks".to_string(),
///         ..Default::default()
///     },
/// };
/// update_records.send(airtable)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateRecords<T> {
    /// The records to update.
    pub records: Vec<UpdateRecord<T>>,
    /// Table name, batch maximum and request options.
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<UpdateRecords<T>> for RequestInput {
    type Error = Error;

    fn try_from(update_records: UpdateRecords<T>) -> Result<Self> {
        update_records
            .write_args
            .into_input(Method::PATCH, update_records.records)
    }
}

impl<T: Serialize> UpdateRecords<T> {
    /// Execute the update records operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "airtable_crud.update_records",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    use reqwest::header;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::single(
        UpdateRecords {
            records: vec![
                UpdateRecord {
                    id: "b".to_string(),
                    fields: json!(
                        {
                            "c": "d"
                        }
                    ),
                },
            ],
            write_args: write::common::WriteArgs {
                table_name: "a".to_string(),
                ..Default::default()
            },
        },
        json!(
            {
                "records": [
                    {
                        "id": "b",
                        "fields": {
                            "c": "d"
                        }
                    }
                ]
            }
        )
    )]
    #[case::typecast(
        UpdateRecords {
            records: vec![
                UpdateRecord {
                    id: "b".to_string(),
                    fields: json!(
                        {
                            "c": "1"
                        }
                    ),
                },
                UpdateRecord {
                    id: "d".to_string(),
                    fields: json!(
                        {}
                    ),
                },
            ],
            write_args: write::common::WriteArgs {
                table_name: "a".to_string(),
                typecast: Some(
                    false
                ),
                ..Default::default()
            },
        },
        json!(
            {
                "records": [
                    {
                        "id": "b",
                        "fields": {
                            "c": "1"
                        }
                    },
                    {
                        "id": "d",
                        "fields": {}
                    }
                ],
                "typecast": false
            }
        )
    )]
    fn test_update_records(#[case] args: UpdateRecords<Value>, #[case] expected: Value) {
        let actual: RequestInput = args.try_into().unwrap();
        assert_eq!(actual.method, Method::PATCH);
        assert_eq!(actual.table_name, "a");
        assert_eq!(actual.body, Some(expected));
        assert_eq!(
            actual.headers.get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[rstest]
    #[case::empty(0)]
    #[case::too_many(11)]
    fn test_update_records_batch_size(#[case] len: usize) {
        let args = UpdateRecords {
            records: vec![
                UpdateRecord {
                    id: "b".to_string(),
                    fields: json!({}),
                };
                len
            ],
            write_args: write::common::WriteArgs {
                table_name: "a".to_string(),
                ..Default::default()
            },
        };
        let actual: Result<RequestInput> = args.try_into();
        assert!(matches!(
            actual,
            Err(Error::Validation(ValidationError::BatchSize { maximum: 10, .. }))
        ));
    }
}
