//! # Jira Issue Endpoints
//!
//! Endpoint implementations for fetching and creating Jira issues.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, instrument, warn};

use crate::client::JiraClient;
use crate::models::{CreateIssueRequest, CreateIssueResult, ErrorCollection, Issue};

impl JiraClient {
  /// Get a Jira issue by key.
  ///
  /// `fields` restricts which fields Jira returns; `None` fetches the
  /// default field set.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, issue_key: &str, fields: Option<&[&str]>) -> Result<Issue> {
    let url = format!("{}/rest/api/3/issue/{}", self.base_url, issue_key);

    let mut request = self.get_request(&url);
    if let Some(fields) = fields {
      request = request.query(&[("fields", fields.join(","))]);
    }

    let response = request.send().await.context("Failed to fetch Jira issue")?;

    let status = response.status();
    debug!("Jira API response status: {}", status);

    match status {
      StatusCode::OK => {
        let payload = response
          .json::<serde_json::Value>()
          .await
          .context("Failed to read Jira issue response")?;
        let issue = Issue::from_value(payload).context("Failed to parse Jira issue")?;
        Ok(issue)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
        warn!("Authentication failed when accessing Jira API");
        Err(anyhow::anyhow!(
          "Authentication failed. Please check your Jira credentials."
        ))
      }
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_key)),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Create a new issue.
  #[instrument(skip(self, request), level = "debug")]
  pub async fn create_issue(&self, request: &CreateIssueRequest) -> Result<CreateIssueResult> {
    let url = format!("{}/rest/api/3/issue", self.base_url);

    let response = self
      .post_request(&url)
      .json(request)
      .send()
      .await
      .context("Failed to create Jira issue")?;

    match response.status() {
      StatusCode::CREATED | StatusCode::OK => {
        let result = response
          .json::<CreateIssueResult>()
          .await
          .context("Failed to parse issue creation response")?;
        Ok(result)
      }
      StatusCode::BAD_REQUEST => {
        let errors = response.json::<ErrorCollection>().await.unwrap_or_default();
        warn!("Issue creation rejected: {:?}", errors);
        Err(anyhow::anyhow!(
          "Issue creation rejected: {}",
          format_error_collection(&errors)
        ))
      }
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

fn format_error_collection(errors: &ErrorCollection) -> String {
  let mut parts: Vec<String> = errors.error_messages.clone();
  for (field, message) in &errors.errors {
    parts.push(format!("{field}: {message}"));
  }
  if parts.is_empty() {
    "no detail provided".to_string()
  } else {
    parts.join("; ")
  }
}
