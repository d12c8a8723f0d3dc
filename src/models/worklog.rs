//! Worklog models for issue time-tracking endpoints.

use serde::{Deserialize, Serialize};

use crate::models::comment::{CommentBody, Visibility};
use crate::models::user::User;

/// Represents a single time-tracking entry on an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
  pub id: String,
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<User>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub update_author: Option<User>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub comment: Option<CommentBody>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub started: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time_spent: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time_spent_seconds: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub issue_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub visibility: Option<Visibility>,
}

/// A paginated worklog list (offset pagination).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPage {
  pub worklogs: Vec<Worklog>,
  #[serde(default)]
  pub start_at: u32,
  #[serde(default)]
  pub max_results: u32,
  #[serde(default)]
  pub total: u32,
}

/// Worklogs as they appear in responses.
///
/// The upstream API is inconsistent: the same logical field arrives either as
/// a bare array of worklogs or as an object wrapping the array with
/// pagination fields. The array form is tried first; an object only matches
/// the wrapped form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum WorklogContainer {
  Listed(Vec<Worklog>),
  Paged(WorklogPage),
}

impl WorklogContainer {
  /// The worklog entries, regardless of which shape arrived.
  pub fn entries(&self) -> &[Worklog] {
    match self {
      WorklogContainer::Listed(worklogs) => worklogs,
      WorklogContainer::Paged(page) => &page.worklogs,
    }
  }

  /// Total count from the pagination envelope, if the wrapped form arrived.
  pub fn total(&self) -> Option<u32> {
    match self {
      WorklogContainer::Listed(_) => None,
      WorklogContainer::Paged(page) => Some(page.total),
    }
  }

  /// Consume the container, yielding the entries.
  pub fn into_entries(self) -> Vec<Worklog> {
    match self {
      WorklogContainer::Listed(worklogs) => worklogs,
      WorklogContainer::Paged(page) => page.worklogs,
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn sample_worklog() -> serde_json::Value {
    json!({
        "id": "100028",
        "self": "https://example.atlassian.net/rest/api/2/issue/10010/worklog/100028",
        "author": { "accountId": "5b10a2844c20165700ede21g", "displayName": "Mia Krystof" },
        "comment": "I did some work here.",
        "started": "2021-01-17T12:34:00.000+0000",
        "timeSpent": "3h 20m",
        "timeSpentSeconds": 12000,
        "issueId": "10010"
    })
  }

  #[test]
  fn test_worklog_deserialization() {
    let worklog: Worklog = serde_json::from_value(sample_worklog()).unwrap();

    assert_eq!(worklog.id, "100028");
    assert_eq!(worklog.time_spent.as_deref(), Some("3h 20m"));
    assert_eq!(worklog.time_spent_seconds, Some(12000));
    assert_eq!(
      worklog.comment.as_ref().map(|c| c.to_plain_text()).as_deref(),
      Some("I did some work here.")
    );
  }

  #[test]
  fn test_container_accepts_bare_array() {
    let json = json!([sample_worklog()]);

    let container: WorklogContainer = serde_json::from_value(json).unwrap();

    assert!(matches!(container, WorklogContainer::Listed(_)));
    assert_eq!(container.entries().len(), 1);
    assert_eq!(container.total(), None);
  }

  #[test]
  fn test_container_accepts_wrapped_object() {
    let json = json!({
        "worklogs": [sample_worklog()],
        "startAt": 0,
        "maxResults": 20,
        "total": 1
    });

    let container: WorklogContainer = serde_json::from_value(json).unwrap();

    assert!(matches!(container, WorklogContainer::Paged(_)));
    assert_eq!(container.entries().len(), 1);
    assert_eq!(container.total(), Some(1));
  }

  #[test]
  fn test_both_container_shapes_yield_identical_entries() {
    let bare: WorklogContainer = serde_json::from_value(json!([sample_worklog()])).unwrap();
    let wrapped: WorklogContainer = serde_json::from_value(json!({ "worklogs": [sample_worklog()] })).unwrap();

    assert_eq!(bare.entries(), wrapped.entries());
    // Pagination fields absent in the wrapped form default to zero
    assert_eq!(wrapped.total(), Some(0));
  }
}
