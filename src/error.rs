//! # Decode Errors
//!
//! Typed error for Jira payloads that fail schema validation. Endpoint
//! functions surface these through `anyhow` so callers get the offending JSON
//! path alongside the underlying serde failure.

use thiserror::Error;

/// A Jira response payload that did not match the documented shape.
///
/// `path` is the JSON path of the subtree that failed to decode (for example
/// `fields` when a required issue field is missing), and the serde source
/// error names the offending field itself.
#[derive(Debug, Error)]
#[error("invalid Jira payload at `{path}`: {source}")]
pub struct DecodeError {
  path: String,
  #[source]
  source: serde_json::Error,
}

impl DecodeError {
  pub(crate) fn new(path: impl Into<String>, source: serde_json::Error) -> Self {
    Self {
      path: path.into(),
      source,
    }
  }

  /// JSON path of the subtree that failed validation.
  pub fn path(&self) -> &str {
    &self.path
  }
}

/// Decode a JSON subtree into `T`, attributing failures to `path`.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(path: &str, value: serde_json::Value) -> Result<T, DecodeError> {
  serde_json::from_value(value).map_err(|e| DecodeError::new(path, e))
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::models::Status;

  #[test]
  fn test_decode_error_names_path_and_field() {
    let err = decode::<Status>("fields.status", json!({ "id": "1" })).unwrap_err();

    assert_eq!(err.path(), "fields.status");
    let message = err.to_string();
    assert!(message.contains("fields.status"));
    assert!(message.contains("name"));
  }
}
