use crate::common::{RequestArgs, RequestInput};
use crate::error::{Result, ValidationError};

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

/// Largest batch Airtable accepts in a single write request.
pub const MAX_BATCH_SIZE: usize = 10;

/// Check that a batch holds between one and `maximum` records.
pub(crate) fn validate_batch_size(len: usize, maximum: usize) -> Result<(), ValidationError> {
    if !(1..=maximum).contains(&len) {
        return Err(ValidationError::BatchSize { len, maximum });
    }
    Ok(())
}

/// Arguments common to batch write operations (create, update, replace).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteArgs {
    /// Largest accepted batch; [`MAX_BATCH_SIZE`] when `None`.
    pub maximum: Option<usize>,
    /// Pass-through request options.
    pub request_args: RequestArgs,
    /// The name of the table to write to.
    pub table_name: String,
    /// Let Airtable convert string values to the field's type.
    pub typecast: Option<bool>,
}

impl WriteArgs {
    /// Validate the batch and wrap it as `{"records": [...]}`.
    pub(crate) fn into_input<R: Serialize>(
        self,
        method: Method,
        records: Vec<R>,
    ) -> Result<RequestInput> {
        validate_batch_size(records.len(), self.maximum.unwrap_or(MAX_BATCH_SIZE))?;
        let mut body = Map::with_capacity(2);
        body.insert("records".to_string(), serde_json::to_value(records)?);
        if let Some(typecast) = self.typecast {
            body.insert("typecast".to_string(), Value::Bool(typecast));
        }
        let input = RequestInput::new(method, self.table_name, self.request_args)
            .with_json(Value::Object(body));
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty(0, 10, false)]
    #[case::one(1, 10, true)]
    #[case::maximum(10, 10, true)]
    #[case::above_maximum(11, 10, false)]
    #[case::custom_maximum(3, 3, true)]
    #[case::above_custom_maximum(4, 3, false)]
    #[case::zero_maximum(1, 0, false)]
    fn test_validate_batch_size(#[case] len: usize, #[case] maximum: usize, #[case] expected: bool) {
        let actual = validate_batch_size(len, maximum);
        match expected {
            true => assert_eq!(actual, Ok(())),
            false => assert_eq!(actual, Err(ValidationError::BatchSize { len, maximum })),
        }
    }
}
