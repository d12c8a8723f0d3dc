//! # Jira Dev-Info Endpoints
//!
//! Endpoint implementations for the development-information panel. These live
//! under `/rest/dev-status` rather than the regular API root and are keyed by
//! the numeric issue id, not the issue key.

use anyhow::{Context, Result};
use reqwest::StatusCode;

use crate::client::JiraClient;
use crate::models::{DevInfoDetailResponse, DevInfoSummary, DevInfoSummaryResponse};

impl JiraClient {
  /// Get aggregated dev-info counts for an issue.
  pub async fn get_dev_info_summary(&self, issue_id: &str) -> Result<DevInfoSummary> {
    let url = format!("{}/rest/dev-status/latest/issue/summary", self.base_url);

    let response = self
      .get_request(&url)
      .query(&[("issueId", issue_id)])
      .send()
      .await
      .context("Failed to fetch dev-info summary")?;

    match response.status() {
      StatusCode::OK => {
        let summary = response
          .json::<DevInfoSummaryResponse>()
          .await
          .context("Failed to parse dev-info summary")?;
        Ok(summary.summary)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_id)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Get detailed dev-info for an issue from one tool category.
  ///
  /// `application_type` names the source-control tool (for example `GitHub`)
  /// and `data_type` the category (`repository`, `branch`, `pullrequest`).
  pub async fn get_dev_info_detail(
    &self,
    issue_id: &str,
    application_type: &str,
    data_type: &str,
  ) -> Result<DevInfoDetailResponse> {
    let url = format!("{}/rest/dev-status/latest/issue/detail", self.base_url);

    let response = self
      .get_request(&url)
      .query(&[
        ("issueId", issue_id),
        ("applicationType", application_type),
        ("dataType", data_type),
      ])
      .send()
      .await
      .context("Failed to fetch dev-info detail")?;

    match response.status() {
      StatusCode::OK => {
        let detail = response
          .json::<DevInfoDetailResponse>()
          .await
          .context("Failed to parse dev-info detail")?;
        Ok(detail)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_id)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
