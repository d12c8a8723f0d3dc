//! # Jira Search Endpoints
//!
//! Endpoint implementations for issue search. Two generations of the search
//! API are covered: the legacy offset-paginated `/search` and the newer
//! cursor-paginated `/search/jql`.

use anyhow::{Context, Result};
use reqwest::StatusCode;

use crate::client::JiraClient;
use crate::models::SearchResult;

impl JiraClient {
  /// Search issues with the legacy offset-paginated endpoint.
  pub async fn search(&self, jql: &str, start_at: Option<u32>, max_results: Option<u32>) -> Result<SearchResult> {
    let url = format!("{}/rest/api/2/search", self.base_url);

    let mut request = self.get_request(&url).query(&[("jql", jql)]);
    if let Some(start_at) = start_at {
      request = request.query(&[("startAt", start_at)]);
    }
    if let Some(max_results) = max_results {
      request = request.query(&[("maxResults", max_results)]);
    }

    let response = request.send().await.context("Failed to search Jira issues")?;

    match response.status() {
      StatusCode::OK => {
        let result = response
          .json::<SearchResult>()
          .await
          .context("Failed to parse Jira search response")?;
        Ok(result)
      }
      StatusCode::BAD_REQUEST => Err(anyhow::anyhow!(
        "Invalid JQL query: {}",
        response.text().await.unwrap_or_default()
      )),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Search issues with the cursor-paginated endpoint.
  ///
  /// Pass the `next_page_token` from a previous result to continue paging;
  /// the final page reports `is_last()`.
  pub async fn search_jql(
    &self,
    jql: &str,
    next_page_token: Option<&str>,
    max_results: Option<u32>,
  ) -> Result<SearchResult> {
    let url = format!("{}/rest/api/3/search/jql", self.base_url);

    let mut request = self.get_request(&url).query(&[("jql", jql)]);
    if let Some(token) = next_page_token {
      request = request.query(&[("nextPageToken", token)]);
    }
    if let Some(max_results) = max_results {
      request = request.query(&[("maxResults", max_results)]);
    }

    let response = request.send().await.context("Failed to search Jira issues")?;

    match response.status() {
      StatusCode::OK => {
        let result = response
          .json::<SearchResult>()
          .await
          .context("Failed to parse Jira search response")?;
        Ok(result)
      }
      StatusCode::BAD_REQUEST => Err(anyhow::anyhow!(
        "Invalid JQL query: {}",
        response.text().await.unwrap_or_default()
      )),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
