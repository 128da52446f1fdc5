use crate::error::ValidationError;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The set of table names known to a base.
///
/// Insertion order is kept, so iterating the schema (as
/// [`crate::read::dump_tables::DumpTables`] does) visits tables in the order they were declared.
///
/// ```rust
/// use airtable_crud::common::schema::Schema;
///
/// let schema = Schema::from_iter(["Tasks", "Projects"]);
/// assert!(schema.contains("Tasks"));
/// assert!(schema.validate("Projects", true).is_ok());
/// assert!(schema.validate("People", true).is_err());
/// assert!(schema.validate("People", false).is_ok());
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Schema(IndexSet<String>);

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table name, returning `false` if it was already present.
    pub fn insert(&mut self, table: impl Into<String>) -> bool {
        self.0.insert(table.into())
    }

    /// Whether the table name is part of the schema.
    pub fn contains(&self, table: &str) -> bool {
        self.0.contains(table)
    }

    /// Whether no table names are declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of declared tables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Table names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Check a table name against the schema.
    ///
    /// Passes when `enforce` is false or when the schema is empty; an empty schema
    /// declares nothing to enforce.
    pub fn validate(&self, table: &str, enforce: bool) -> Result<(), ValidationError> {
        if enforce && !self.is_empty() && !self.contains(table) {
            return Err(ValidationError::UnknownTable {
                table: table.to_string(),
            });
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Schema {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for Schema {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::enforced_known(vec!["Tasks"], true, "Tasks", true)]
    #[case::enforced_unknown(vec!["Tasks"], true, "Projects", false)]
    #[case::not_enforced_unknown(vec!["Tasks"], false, "Projects", true)]
    #[case::enforced_empty(vec![], true, "Projects", true)]
    #[case::not_enforced_empty(vec![], false, "Projects", true)]
    fn test_validate(
        #[case] tables: Vec<&str>,
        #[case] enforce: bool,
        #[case] table: &str,
        #[case] expected: bool,
    ) {
        let schema = Schema::from_iter(tables);
        let actual = schema.validate(table, enforce);
        match expected {
            true => assert_eq!(actual, Ok(())),
            false => assert_eq!(
                actual,
                Err(ValidationError::UnknownTable {
                    table: table.to_string(),
                })
            ),
        }
    }

    #[test]
    fn test_iteration_order() {
        let mut schema = Schema::from_iter(["b", "a"]);
        assert!(!schema.insert("b"));
        schema.extend(["c"]);
        let actual: Vec<&str> = schema.iter().collect();
        assert_eq!(actual, vec!["b", "a", "c"]);
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_deserialize() {
        let schema: Schema = serde_json::from_str(r#"["a", "b", "a"]"#).unwrap();
        assert_eq!(schema, Schema::from_iter(["a", "b"]));
    }
}
