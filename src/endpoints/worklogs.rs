//! # Jira Worklog Endpoints
//!
//! Endpoint implementation for fetching issue worklogs. The response is
//! decoded through `WorklogContainer` because the upstream API serves both a
//! bare array and a wrapped page for the same resource.

use anyhow::{Context, Result};
use reqwest::StatusCode;

use crate::client::JiraClient;
use crate::models::WorklogContainer;

impl JiraClient {
  /// Get the worklogs recorded on an issue.
  pub async fn list_worklogs(&self, issue_key: &str) -> Result<WorklogContainer> {
    let url = format!("{}/rest/api/3/issue/{}/worklog", self.base_url, issue_key);

    let response = self
      .get_request(&url)
      .send()
      .await
      .context("Failed to fetch Jira worklogs")?;

    match response.status() {
      StatusCode::OK => {
        let container = response
          .json::<WorklogContainer>()
          .await
          .context("Failed to parse Jira worklogs")?;
        Ok(container)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_key)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::models::JiraAuth;

  fn test_client(base_url: &str) -> JiraClient {
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };
    JiraClient::new(base_url, auth)
  }

  fn sample_worklog() -> serde_json::Value {
    json!({
        "id": "100028",
        "author": { "displayName": "Mia Krystof" },
        "comment": "I did some work here.",
        "started": "2021-01-17T12:34:00.000+0000",
        "timeSpent": "3h 20m",
        "timeSpentSeconds": 12000
    })
  }

  #[tokio::test]
  async fn test_list_worklogs_wrapped_object() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/TEST-123/worklog"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "worklogs": [ sample_worklog() ],
          "startAt": 0,
          "maxResults": 20,
          "total": 1
      })))
      .mount(&mock_server)
      .await;

    let container = client.list_worklogs("TEST-123").await?;

    assert_eq!(container.entries().len(), 1);
    assert_eq!(container.total(), Some(1));
    assert_eq!(container.entries()[0].time_spent_seconds, Some(12000));

    Ok(())
  }

  #[tokio::test]
  async fn test_list_worklogs_bare_array() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/TEST-123/worklog"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([ sample_worklog() ])))
      .mount(&mock_server)
      .await;

    let container = client.list_worklogs("TEST-123").await?;

    assert_eq!(container.entries().len(), 1);
    assert_eq!(container.total(), None);

    Ok(())
  }

  #[tokio::test]
  async fn test_list_worklogs_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/NOPE-1/worklog"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "errorMessages": ["Issue does not exist or you do not have permission to see it."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.list_worklogs("NOPE-1").await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));

    Ok(())
  }
}
