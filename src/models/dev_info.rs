//! # Dev-Info Models
//!
//! Shapes for Jira's development-information panel: source-control activity
//! (repositories, branches, pull requests) linked to an issue, plus the
//! aggregated per-category counts shown in the issue sidebar.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope of the dev-status detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevInfoDetailResponse {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub errors: Vec<String>,
  #[serde(default)]
  pub detail: Vec<DevInfoDetail>,
}

/// Source-control activity reported by one tool instance.
///
/// Extensible: instances report tool-specific keys (`_instance`, custom
/// summaries) that are preserved in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DevInfoDetail {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub repositories: Vec<DevInfoRepository>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub branches: Vec<DevInfoBranch>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub pull_requests: Vec<DevInfoPullRequest>,
  #[serde(flatten)]
  pub extra: HashMap<String, Value>,
}

/// A repository with commits linked to the issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevInfoRepository {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub commits: Vec<DevInfoCommit>,
}

/// A commit referencing the issue key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DevInfoCommit {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<DevInfoActor>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author_timestamp: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file_count: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub merge: Option<bool>,
}

/// Author or reviewer identity as reported by the source-control tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevInfoActor {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar: Option<String>,
}

/// A branch linked to the issue, with its most recent commit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DevInfoBranch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_commit: Option<DevInfoCommit>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub repository: Option<DevInfoRepository>,
}

/// A pull request linked to the issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DevInfoPullRequest {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  /// Upstream status literal: OPEN, MERGED, or DECLINED.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<DevInfoActor>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub reviewers: Vec<DevInfoReviewer>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source: Option<DevInfoBranchRef>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub destination: Option<DevInfoBranchRef>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_update: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub comment_count: Option<u32>,
}

/// A reviewer on a pull request, with approval state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevInfoReviewer {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub approved: Option<bool>,
}

/// Source or destination branch reference on a pull request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevInfoBranchRef {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub branch: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
}

/// Envelope of the dev-status summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevInfoSummaryResponse {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub errors: Vec<String>,
  pub summary: DevInfoSummary,
}

/// Aggregated dev-info counts, one entry per category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevInfoSummary {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub repository: Option<DevInfoCategory>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub branch: Option<DevInfoCategory>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pullrequest: Option<DevInfoCategory>,
}

/// Overall count for a category plus the breakdown by tool instance type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DevInfoCategory {
  pub overall: DevInfoOverall,
  #[serde(default, skip_serializing_if = "HashMap::is_empty")]
  pub by_instance_type: HashMap<String, DevInfoInstanceType>,
}

/// Overall figures for one category.
///
/// Pull-request summaries carry extra counters (open/merged/declined) that
/// vary by category; those pass through in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DevInfoOverall {
  pub count: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_updated: Option<String>,
  #[serde(flatten)]
  pub extra: HashMap<String, Value>,
}

/// Per-instance-type figures within a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevInfoInstanceType {
  pub count: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_detail_deserialization() {
    let json = json!({
        "errors": [],
        "detail": [
            {
                "repositories": [
                    {
                        "name": "widgets",
                        "url": "https://github.com/example/widgets",
                        "commits": [
                            {
                                "id": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
                                "displayId": "6dcb09b",
                                "message": "WID-42 guard against empty CSV",
                                "author": { "name": "Mia Krystof" },
                                "authorTimestamp": "2021-01-17T12:34:00.000+0000",
                                "fileCount": 3,
                                "merge": false
                            }
                        ]
                    }
                ],
                "branches": [
                    {
                        "name": "wid-42-empty-csv",
                        "url": "https://github.com/example/widgets/tree/wid-42-empty-csv",
                        "lastCommit": { "displayId": "6dcb09b" }
                    }
                ],
                "pullRequests": [
                    {
                        "id": "#87",
                        "name": "WID-42: guard against empty CSV",
                        "status": "OPEN",
                        "author": { "name": "Mia Krystof" },
                        "reviewers": [ { "name": "Ted Husk", "approved": true } ],
                        "source": { "branch": "wid-42-empty-csv" },
                        "destination": { "branch": "main" },
                        "lastUpdate": "2021-01-18T10:00:00.000+0000"
                    }
                ],
                "_instance": { "name": "GitHub", "type": "GitHub" }
            }
        ]
    });

    let response: DevInfoDetailResponse = serde_json::from_value(json).unwrap();
    let detail = &response.detail[0];

    assert_eq!(detail.repositories[0].commits[0].display_id.as_deref(), Some("6dcb09b"));
    assert_eq!(detail.branches[0].last_commit.as_ref().unwrap().display_id.as_deref(), Some("6dcb09b"));
    assert_eq!(detail.pull_requests[0].status.as_deref(), Some("OPEN"));
    assert_eq!(detail.pull_requests[0].reviewers[0].approved, Some(true));
    // tool-specific keys are preserved
    assert_eq!(detail.extra["_instance"]["type"], json!("GitHub"));
  }

  #[test]
  fn test_detail_extra_keys_round_trip() {
    let json = json!({
        "detail": [ { "repositories": [], "_instance": { "singleInstance": true } } ]
    });

    let response: DevInfoDetailResponse = serde_json::from_value(json).unwrap();
    let encoded = serde_json::to_value(&response.detail[0]).unwrap();

    assert_eq!(encoded["_instance"], json!({ "singleInstance": true }));
  }

  #[test]
  fn test_summary_deserialization() {
    let json = json!({
        "errors": [],
        "summary": {
            "repository": {
                "overall": { "count": 2, "lastUpdated": "2021-01-18T10:00:00.000+0000" },
                "byInstanceType": { "github": { "count": 2, "name": "GitHub" } }
            },
            "branch": {
                "overall": { "count": 1, "lastUpdated": null },
                "byInstanceType": { "github": { "count": 1, "name": "GitHub" } }
            },
            "pullrequest": {
                "overall": {
                    "count": 1,
                    "lastUpdated": "2021-01-18T10:00:00.000+0000",
                    "stateCount": 1,
                    "state": "OPEN",
                    "open": true
                },
                "byInstanceType": { "github": { "count": 1, "name": "GitHub" } }
            }
        }
    });

    let response: DevInfoSummaryResponse = serde_json::from_value(json).unwrap();
    let summary = response.summary;

    assert_eq!(summary.repository.as_ref().unwrap().overall.count, 2);
    assert_eq!(
      summary.branch.as_ref().unwrap().by_instance_type["github"].count,
      1
    );
    let pr_overall = &summary.pullrequest.as_ref().unwrap().overall;
    assert_eq!(pr_overall.count, 1);
    // category-specific counters pass through
    assert_eq!(pr_overall.extra["state"], json!("OPEN"));
  }
}
