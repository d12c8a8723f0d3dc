//! # Create-Metadata and Issue-Creation Models
//!
//! Field-level rules Jira exposes per project and issue type so payloads can
//! be validated client-side before `POST /issue`, plus the request/result
//! shapes of issue creation itself.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::document::AdfDocument;
use crate::models::transition::TransitionRef;

/// Response of the expanded create-metadata endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateMetaResponse {
  #[serde(default)]
  pub projects: Vec<CreateMetaProject>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expand: Option<String>,
}

/// Creatable issue types for one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateMetaProject {
  pub id: String,
  pub key: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default)]
  pub issuetypes: Vec<CreateMetaIssueType>,
}

/// One creatable issue type, with its field metadata when expanded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateMetaIssueType {
  pub id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subtask: Option<bool>,
  /// Field metadata keyed by field id; only present with
  /// `expand=projects.issuetypes.fields`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fields: Option<HashMap<String, FieldMeta>>,
}

/// Paginated issue-type page from the per-project createmeta endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMetaIssueTypePage {
  pub issue_types: Vec<CreateMetaIssueType>,
  #[serde(default)]
  pub start_at: u32,
  #[serde(default)]
  pub max_results: u32,
  #[serde(default)]
  pub total: u32,
}

/// Metadata describing one field available during issue creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldMeta {
  pub required: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schema: Option<FieldSchema>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub allowed_values: Vec<AllowedValue>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub has_default_value: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default_value: Option<Value>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub operations: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub auto_complete_url: Option<String>,
}

/// Type description of a field, including the custom-field id when the field
/// is instance-defined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
  #[serde(rename = "type")]
  pub schema_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub items: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub system: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom_id: Option<u64>,
}

/// One allowed value of an enumerated field.
///
/// The concrete shape varies by field type (priorities carry `name`, select
/// options carry `value`, ...); anything else passes through in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllowedValue {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(flatten)]
  pub extra: HashMap<String, Value>,
}

/// Request payload for creating an issue.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateIssueRequest {
  pub fields: serde_json::Map<String, Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub update: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub properties: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub transition: Option<TransitionRef>,
}

impl CreateIssueRequest {
  /// Start a request with the three fields every creation needs.
  pub fn new(project_key: &str, issue_type: &str, summary: &str) -> Self {
    let mut fields = serde_json::Map::new();
    fields.insert("project".to_string(), serde_json::json!({ "key": project_key }));
    fields.insert("issuetype".to_string(), serde_json::json!({ "name": issue_type }));
    fields.insert("summary".to_string(), Value::String(summary.to_string()));
    Self {
      fields,
      ..Self::default()
    }
  }

  /// Set the description from plain text, encoding it in document form as
  /// the write endpoint requires.
  pub fn description_text(mut self, text: &str) -> Self {
    let doc = AdfDocument::from_text(text);
    self.fields.insert(
      "description".to_string(),
      serde_json::to_value(doc).unwrap_or(Value::Null),
    );
    self
  }

  /// Set an arbitrary field, custom fields included.
  pub fn field(mut self, key: &str, value: Value) -> Self {
    self.fields.insert(key.to_string(), value);
    self
  }
}

/// Result of creating an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateIssueResult {
  pub id: String,
  pub key: String,
  #[serde(rename = "self")]
  pub self_url: String,
  /// Outcome of the transition requested alongside creation, when one was.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub transition: Option<NestedTransitionResult>,
}

/// Status and error detail of a transition performed during creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NestedTransitionResult {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error_collection: Option<ErrorCollection>,
}

/// Jira's standard error payload.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCollection {
  #[serde(default)]
  pub error_messages: Vec<String>,
  #[serde(default)]
  pub errors: HashMap<String, String>,
}
