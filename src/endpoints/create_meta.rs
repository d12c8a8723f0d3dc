//! # Jira Create-Metadata Endpoints
//!
//! Endpoint implementations for fetching the field rules Jira exposes per
//! project and issue type ahead of issue creation.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::models::{CreateMetaIssueTypePage, CreateMetaResponse};

impl JiraClient {
  /// Get create-metadata, expanded down to field level.
  ///
  /// `project_keys` and `issue_type_names` narrow the result; both empty
  /// returns metadata for every project the caller can create issues in.
  pub async fn get_create_meta(
    &self,
    project_keys: &[&str],
    issue_type_names: &[&str],
  ) -> Result<CreateMetaResponse> {
    let url = format!("{}/rest/api/3/issue/createmeta", self.base_url);

    let mut request = self
      .get_request(&url)
      .query(&[("expand", "projects.issuetypes.fields")]);
    if !project_keys.is_empty() {
      request = request.query(&[("projectKeys", project_keys.join(","))]);
    }
    if !issue_type_names.is_empty() {
      request = request.query(&[("issuetypeNames", issue_type_names.join(","))]);
    }

    let response = request.send().await.context("Failed to fetch Jira create metadata")?;

    let status = response.status();
    debug!("Jira API response status: {}", status);

    match status {
      StatusCode::OK => {
        let meta = response
          .json::<CreateMetaResponse>()
          .await
          .context("Failed to parse Jira create metadata")?;
        Ok(meta)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Get the paginated issue-type metadata for one project.
  pub async fn get_create_meta_issue_types(
    &self,
    project_key: &str,
    start_at: Option<u32>,
    max_results: Option<u32>,
  ) -> Result<CreateMetaIssueTypePage> {
    let url = format!("{}/rest/api/3/issue/createmeta/{}/issuetypes", self.base_url, project_key);

    let mut request = self.get_request(&url);
    if let Some(start_at) = start_at {
      request = request.query(&[("startAt", start_at)]);
    }
    if let Some(max_results) = max_results {
      request = request.query(&[("maxResults", max_results)]);
    }

    let response = request.send().await.context("Failed to fetch Jira issue types")?;

    match response.status() {
      StatusCode::OK => {
        let page = response
          .json::<CreateMetaIssueTypePage>()
          .await
          .context("Failed to parse Jira issue types")?;
        Ok(page)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Project {} not found", project_key)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
