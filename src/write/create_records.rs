use crate::client::Airtable;
use crate::common::RequestInput;
use crate::common::record::NewRecord;
use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::write;

use reqwest::Method;
use serde::Serialize;

/// Create records operation.
///
/// Each entry of `records` holds the fields of one new record.
///
/// ```rust,no_run
/// use airtable_crud::{Airtable, write};
/// use serde_json::json;
///
/// # fn example(airtable: &Airtable) -> Result<(), Box<dyn std::error::Error>> {
/// let create_records = write::create_records::CreateRecords {
///     records: vec![json!({"Name": "Write docs", "Status": "Todo"})],
///     write_args: write::common::WriteArgs {
///         table_name: "Tasks".to_string(),
///         typecast: Some(true),
///         ..Default::default()
///     },
/// };
/// create_records.send(airtable)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateRecords<T> {
    /// Fields of the records to create.
    pub records: Vec<T>,
    /// Table name, batch maximum and request options.
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<CreateRecords<T>> for RequestInput {
    type Error = Error;

    fn try_from(create_records: CreateRecords<T>) -> Result<Self> {
        let records: Vec<NewRecord<T>> = create_records
            .records
            .into_iter()
            .map(|fields| NewRecord { fields })
            .collect();
        create_records.write_args.into_input(Method::POST, records)
    }
}

impl<T: Serialize> CreateRecords<T> {
    /// Execute the create records operation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "airtable_crud.create_records",
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
    use crate::common::RequestArgs;
    use crate::error::ValidationError;

    use reqwest::header;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn json_headers() -> header::HeaderMap {
        header::HeaderMap::from_iter([(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        )])
    }

    #[rstest]
    #[case::empty(
        CreateRecords {
            records: vec![
                json!(
                    {
                        "Name": "A"
                    }
                ),
            ],
            write_args: write::common::WriteArgs {
                table_name: "a".to_string(),
                ..Default::default()
            },
        },
        RequestInput {
            body: Some(
                json!(
                    {
                        "records": [
                            {
                                "fields": {
                                    "Name": "A"
                                }
                            }
                        ]
                    }
                )
            ),
            headers: json_headers(),
            method: Method::POST,
            query: vec![],
            raise_for_status: false,
            table_name: "a".to_string(),
            timeout: None,
        }
    )]
    #[case::full(
        CreateRecords {
            records: vec![
                json!(
                    {
                        "b": 1
                    }
                ),
                json!(
                    {
                        "c": [
                            "d"
                        ]
                    }
                ),
            ],
            write_args: write::common::WriteArgs {
                maximum: Some(
                    2
                ),
                request_args: RequestArgs {
                    raise_for_status: true,
                    ..Default::default()
                },
                table_name: "a".to_string(),
                typecast: Some(
                    true
                ),
            },
        },
        RequestInput {
            body: Some(
                json!(
                    {
                        "records": [
                            {
                                "fields": {
                                    "b": 1
                                }
                            },
                            {
                                "fields": {
                                    "c": [
                                        "d"
                                    ]
                                }
                            }
                        ],
                        "typecast": true
                    }
                )
            ),
            headers: json_headers(),
            method: Method::POST,
            query: vec![],
            raise_for_status: true,
            table_name: "a".to_string(),
            timeout: None,
        }
    )]
    fn test_create_records(#[case] args: CreateRecords<Value>, #[case] expected: RequestInput) {
        let actual: RequestInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::empty(0, None)]
    #[case::above_default_maximum(11, None)]
    #[case::above_custom_maximum(4, Some(3))]
    fn test_create_records_batch_size(#[case] len: usize, #[case] maximum: Option<usize>) {
        let args = CreateRecords {
            records: vec![json!({"a": "b"}); len],
            write_args: write::common::WriteArgs {
                maximum,
                table_name: "a".to_string(),
                ..Default::default()
            },
        };
        let actual: Result<RequestInput> = args.try_into();
        assert!(matches!(
            actual,
            Err(Error::Validation(ValidationError::BatchSize { len: actual_len, .. })) if actual_len == len
        ));
    }

    #[rstest]
    #[case::one(1)]
    #[case::maximum(10)]
    fn test_create_records_batch_size_boundaries(#[case] len: usize) {
        let args = CreateRecords {
            records: vec![json!({"a": "b"}); len],
            write_args: write::common::WriteArgs {
                table_name: "a".to_string(),
                ..Default::default()
            },
        };
        let actual: RequestInput = args.try_into().unwrap();
        let records = actual.body.unwrap()["records"].as_array().unwrap().len();
        assert_eq!(records, len);
    }
}
