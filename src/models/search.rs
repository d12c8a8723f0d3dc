//! Search result models for the legacy and JQL search endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::issue::Issue;

/// Pagination envelope of a search response.
///
/// Two generations of the search API coexist: the legacy endpoint pages by
/// offset (`startAt`/`maxResults`/`total`) while the newer one pages by
/// cursor (`nextPageToken`/`isLast`). The payload carries no version marker,
/// so discrimination is structural: the offset shape, whose three fields are
/// all required, is tried first and the cursor shape is the fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SearchPagination {
  Offset {
    #[serde(rename = "startAt")]
    start_at: u32,
    #[serde(rename = "maxResults")]
    max_results: u32,
    total: u32,
  },
  Cursor {
    #[serde(rename = "isLast")]
    is_last: bool,
    #[serde(rename = "nextPageToken", default, skip_serializing_if = "Option::is_none")]
    next_page_token: Option<String>,
  },
}

/// A page of issues from a search query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
  pub issues: Vec<Issue>,
  #[serde(flatten)]
  pub pagination: SearchPagination,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub warning_messages: Option<Vec<String>>,
  /// Field-id to display-name map, present when requested via `expand`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub names: Option<HashMap<String, String>>,
}

impl SearchResult {
  /// Total hit count, only known under offset pagination.
  pub fn total(&self) -> Option<u32> {
    match self.pagination {
      SearchPagination::Offset { total, .. } => Some(total),
      SearchPagination::Cursor { .. } => None,
    }
  }

  /// Continuation token, only present under cursor pagination.
  pub fn next_page_token(&self) -> Option<&str> {
    match &self.pagination {
      SearchPagination::Offset { .. } => None,
      SearchPagination::Cursor { next_page_token, .. } => next_page_token.as_deref(),
    }
  }

  /// Whether this is the final page. Derived from `total` under offset
  /// pagination, reported directly under cursor pagination.
  pub fn is_last(&self) -> bool {
    match &self.pagination {
      SearchPagination::Offset {
        start_at,
        total,
        ..
      } => start_at + self.issues.len() as u32 >= *total,
      SearchPagination::Cursor { is_last, .. } => *is_last,
    }
  }
}
