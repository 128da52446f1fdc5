use serde::{Deserialize, Serialize};

/// An existing record to update or replace, in Airtable's update shape.
///
/// ```rust
/// use airtable_crud::common::record::UpdateRecord;
/// use serde_json::json;
///
/// let record = UpdateRecord {
///     id: "rec123".to_string(),
///     fields: json!({"Status": "Done"}),
/// };
/// assert_eq!(
///     serde_json::to_value(&record).unwrap(),
///     json!({"id": "rec123", "fields": {"Status": "Done"}}),
/// );
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UpdateRecord<T> {
    /// The record identifier, e.g. `rec123`.
    pub id: String,
    /// The fields to write.
    pub fields: T,
}

/// A new record, serialized as `{"fields": ...}`.
#[derive(Debug, Serialize)]
pub(crate) struct NewRecord<T> {
    pub(crate) fields: T,
}

/// One or more record identifiers.
///
/// Built from a single ID or from any collection of IDs.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct RecordIds(
    /// The identifiers, in request order.
    pub Vec<String>,
);

impl RecordIds {
    /// Number of identifiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no identifiers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Identifiers in the order they were given.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for RecordIds {
    fn from(id: &str) -> Self {
        Self(vec![id.to_string()])
    }
}

impl From<String> for RecordIds {
    fn from(id: String) -> Self {
        Self(vec![id])
    }
}

impl From<Vec<String>> for RecordIds {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl From<Vec<&str>> for RecordIds {
    fn from(ids: Vec<&str>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<&[&str]> for RecordIds {
    fn from(ids: &[&str]) -> Self {
        ids.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for RecordIds {
    fn from(ids: [&str; N]) -> Self {
        ids.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for RecordIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
