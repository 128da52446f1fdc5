//! Common utilities for Airtable operations.
//!
//! This module provides shared types used across read and write operations,
//! including the table schema, record shapes and pass-through request options.

/// Record shapes and record identifiers.
pub mod record;

/// Table schema used to validate table names.
pub mod schema;

use reqwest::{Method, header};
use serde_json::Value;
use std::time;

/// Pass-through options applied to any request.
///
/// ```rust
/// use airtable_crud::common::RequestArgs;
/// use std::time::Duration;
///
/// let request_args = RequestArgs {
///     raise_for_status: true,
///     timeout: Some(Duration::from_secs(5)),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestArgs {
    /// Extra headers.
    ///
    /// They override the defaults set by an operation (such as `Content-Type`),
    /// but never the `Authorization` header.
    pub headers: header::HeaderMap,
    /// Extra query parameters, appended after the ones an operation sets.
    pub query: Vec<(String, String)>,
    /// Turn 4xx and 5xx responses into [`crate::Error::Status`].
    ///
    /// When `false`, the response is returned as-is for the caller to inspect.
    pub raise_for_status: bool,
    /// Timeout for this request, handed to the transport.
    pub timeout: Option<time::Duration>,
}

/// A table-scoped request, before the connection settings are applied.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RequestInput {
    pub(crate) body: Option<Value>,
    pub(crate) headers: header::HeaderMap,
    pub(crate) method: Method,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) raise_for_status: bool,
    pub(crate) table_name: String,
    pub(crate) timeout: Option<time::Duration>,
}

impl RequestInput {
    pub(crate) fn new(method: Method, table_name: String, request_args: RequestArgs) -> Self {
        Self {
            body: None,
            headers: request_args.headers,
            method,
            query: request_args.query,
            raise_for_status: request_args.raise_for_status,
            table_name,
            timeout: request_args.timeout,
        }
    }

    /// Attach a JSON body, defaulting `Content-Type` unless the caller already set it.
    pub(crate) fn with_json(mut self, body: Value) -> Self {
        if !self.headers.contains_key(header::CONTENT_TYPE) {
            self.headers.insert(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static("application/json"),
            );
        }
        self.body = Some(body);
        self
    }

    /// Put query pairs in front of the caller supplied ones.
    pub(crate) fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        let mut merged = query;
        merged.append(&mut self.query);
        self.query = merged;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_with_json_sets_content_type() {
        let input = RequestInput::new(Method::POST, "a".to_string(), RequestArgs::default())
            .with_json(json!({"b": "c"}));
        assert_eq!(
            input.headers.get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(input.body, Some(json!({"b": "c"})));
    }

    #[test]
    fn test_with_json_keeps_caller_content_type() {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("text/plain"),
        );
        let request_args = RequestArgs {
            headers,
            ..Default::default()
        };
        let input =
            RequestInput::new(Method::PATCH, "a".to_string(), request_args).with_json(json!([]));
        assert_eq!(
            input.headers.get(header::CONTENT_TYPE).unwrap(),
            "text/plain"
        );
    }

    #[test]
    fn test_with_query_order() {
        let request_args = RequestArgs {
            query: vec![("c".to_string(), "d".to_string())],
            ..Default::default()
        };
        let input = RequestInput::new(Method::GET, "a".to_string(), request_args)
            .with_query(vec![("a".to_string(), "b".to_string())]);
        assert_eq!(
            input.query,
            vec![
                ("a".to_string(), "b".to_string()),
                ("c".to_string(), "d".to_string()),
            ]
        );
    }
}
