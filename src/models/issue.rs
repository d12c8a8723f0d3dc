//! # Issue Models
//!
//! The issue aggregate and its embedded field objects. `IssueFields` is the
//! bulk of every issue payload and is extensible: Jira instances add custom
//! fields dynamically, so unrecognized keys are preserved in a side map
//! rather than rejected.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DecodeError, decode};
use crate::models::comment::{CommentBody, CommentPage};
use crate::models::de;
use crate::models::user::User;
use crate::models::worklog::WorklogContainer;

/// Represents an issue status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Status {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status_category: Option<StatusCategory>,
}

/// The broad category a status belongs to (new / indeterminate / done).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusCategory {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

/// Represents an issue priority.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Priority {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub icon_url: Option<String>,
}

/// Represents an issue type (Bug, Task, Story, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueType {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subtask: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub icon_url: Option<String>,
}

/// The project an issue belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub id: String,
  pub key: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<HashMap<String, String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub simplified: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_category: Option<ProjectCategory>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub insight: Option<Value>,
}

/// Category a project is grouped under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectCategory {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

/// Represents a project component referenced by an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Component {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub name: String,
}

/// Represents a project version (fix version, affected version).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Version {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub released: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub release_date: Option<String>,
}

/// Time-tracking estimates and actuals on an issue.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeTracking {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub original_estimate: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub remaining_estimate: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time_spent: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub original_estimate_seconds: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub remaining_estimate_seconds: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time_spent_seconds: Option<u64>,
}

/// Watcher summary on an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Watches {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub watch_count: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_watching: Option<bool>,
}

/// A typed relation between two issues.
///
/// Exactly one of `inward_issue`/`outward_issue` is populated depending on
/// which side of the link the containing issue sits on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueLink {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(rename = "type")]
  pub link_type: IssueLinkType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub inward_issue: Option<LinkedIssue>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub outward_issue: Option<LinkedIssue>,
}

/// The type of an issue link, with directional phrasing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IssueLinkType {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub inward: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub outward: Option<String>,
}

/// Stub of the issue on the other end of a link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedIssue {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub key: String,
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fields: Option<LinkedIssueFields>,
}

/// Summary fields exposed on a linked-issue stub.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedIssueFields {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<Status>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub issuetype: Option<IssueType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub priority: Option<Priority>,
}

/// A file attached to an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
  pub id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub filename: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<User>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub size: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mime_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub thumbnail: Option<String>,
}

/// The mutable field-set of one issue.
///
/// `assignee` and `reporter` are double-options: `None` means the field was
/// not present in the payload, `Some(None)` means Jira explicitly reported
/// `null` (an unassigned issue). Unknown keys, custom fields included, land
/// in `extra` and survive re-encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueFields {
  pub summary: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<CommentBody>,
  pub status: Status,
  pub project: Project,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub priority: Option<Priority>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub issuetype: Option<IssueType>,
  #[serde(default, deserialize_with = "de::double_option", skip_serializing_if = "Option::is_none")]
  pub assignee: Option<Option<User>>,
  #[serde(default, deserialize_with = "de::double_option", skip_serializing_if = "Option::is_none")]
  pub reporter: Option<Option<User>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub creator: Option<User>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub labels: Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub components: Vec<Component>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub fix_versions: Vec<Version>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub timetracking: Option<TimeTracking>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub comment: Option<CommentPage>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub worklog: Option<WorklogContainer>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub issuelinks: Vec<IssueLink>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attachment: Option<Vec<Attachment>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub watches: Option<Watches>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated: Option<String>,
  #[serde(flatten)]
  pub extra: HashMap<String, Value>,
}

impl IssueFields {
  /// The assignee, if one is set. Collapses absent and explicitly-null.
  pub fn assignee(&self) -> Option<&User> {
    self.assignee.as_ref().and_then(|a| a.as_ref())
  }

  /// The reporter, if one is set. Collapses absent and explicitly-null.
  pub fn reporter(&self) -> Option<&User> {
    self.reporter.as_ref().and_then(|r| r.as_ref())
  }

  /// True only when Jira explicitly reported `"assignee": null`.
  pub fn is_unassigned(&self) -> bool {
    matches!(self.assignee, Some(None))
  }
}

/// Represents one Jira issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
  pub id: String,
  pub key: String,
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub fields: IssueFields,
}

impl Issue {
  /// Decode an issue payload, attributing field failures to `fields.*`.
  ///
  /// The envelope and the field-set are decoded in two stages so that a
  /// missing required field inside `fields` surfaces with the `fields` path
  /// prefix instead of an undifferentiated top-level error.
  pub fn from_value(value: Value) -> Result<Self, DecodeError> {
    #[derive(Deserialize)]
    struct RawIssue {
      id: String,
      key: String,
      #[serde(rename = "self", default)]
      self_url: Option<String>,
      fields: Value,
    }

    let raw: RawIssue = decode("issue", value)?;
    let fields: IssueFields = decode("fields", raw.fields)?;

    Ok(Self {
      id: raw.id,
      key: raw.key,
      self_url: raw.self_url,
      fields,
    })
  }
}
