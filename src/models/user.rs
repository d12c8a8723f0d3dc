//! User reference models shared by comments, worklogs, and issue fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Represents a Jira account reference (author, assignee, reporter, creator).
///
/// Every attribute is optional because Jira Cloud and Server editions expose
/// different subsets; `accountId` in particular only exists on Cloud.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email_address: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub active: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<HashMap<String, String>>,
}
