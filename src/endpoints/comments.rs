//! # Jira Comment Endpoints
//!
//! Endpoint implementations for listing and adding issue comments.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::instrument;

use crate::client::JiraClient;
use crate::models::{Comment, CommentPage, CreateCommentRequest};

impl JiraClient {
  /// List comments on an issue, oldest first.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_comments(
    &self,
    issue_key: &str,
    start_at: Option<u32>,
    max_results: Option<u32>,
  ) -> Result<CommentPage> {
    let url = format!("{}/rest/api/3/issue/{}/comment", self.base_url, issue_key);

    let mut request = self.get_request(&url);
    if let Some(start_at) = start_at {
      request = request.query(&[("startAt", start_at)]);
    }
    if let Some(max_results) = max_results {
      request = request.query(&[("maxResults", max_results)]);
    }

    let response = request.send().await.context("Failed to fetch Jira comments")?;

    match response.status() {
      StatusCode::OK => {
        let page = response
          .json::<CommentPage>()
          .await
          .context("Failed to parse Jira comments")?;
        Ok(page)
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

  /// Add a comment to an issue from plain text.
  ///
  /// The text is wrapped in a single-paragraph rich-text document, which is
  /// the only form the write endpoint accepts.
  pub async fn add_comment(&self, issue_key: &str, text: &str) -> Result<Comment> {
    self
      .add_comment_request(issue_key, &CreateCommentRequest::from_text(text))
      .await
  }

  /// Add a comment with full control over body and visibility.
  #[instrument(skip(self, request), level = "debug")]
  pub async fn add_comment_request(&self, issue_key: &str, request: &CreateCommentRequest) -> Result<Comment> {
    let url = format!("{}/rest/api/3/issue/{}/comment", self.base_url, issue_key);

    let response = self
      .post_request(&url)
      .json(request)
      .send()
      .await
      .context("Failed to add Jira comment")?;

    match response.status() {
      StatusCode::CREATED | StatusCode::OK => {
        let comment = response
          .json::<Comment>()
          .await
          .context("Failed to parse Jira comment")?;
        Ok(comment)
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
  use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::models::{CommentBody, JiraAuth};

  fn test_client(base_url: &str) -> JiraClient {
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };
    JiraClient::new(base_url, auth)
  }

  #[tokio::test]
  async fn test_list_comments() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/TEST-123/comment"))
      .and(basic_auth("test_user", "test_token"))
      .and(query_param("maxResults", "10"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "comments": [
              {
                  "id": "10001",
                  "author": { "displayName": "Mia Krystof" },
                  "body": "Legacy plain-text comment",
                  "created": "2021-01-17T12:34:00.000+0000"
              },
              {
                  "id": "10002",
                  "body": {
                      "version": 1,
                      "type": "doc",
                      "content": [
                          { "type": "paragraph", "content": [ { "type": "text", "text": "Structured comment" } ] }
                      ]
                  }
              }
          ],
          "startAt": 0,
          "maxResults": 10,
          "total": 2
      })))
      .mount(&mock_server)
      .await;

    let page = client.list_comments("TEST-123", None, Some(10)).await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.comments[0].body.to_plain_text(), "Legacy plain-text comment");
    assert!(matches!(page.comments[1].body, CommentBody::Document(_)));

    Ok(())
  }

  #[tokio::test]
  async fn test_add_comment_sends_document_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    let expected_body = json!({
        "body": {
            "version": 1,
            "type": "doc",
            "content": [
                { "type": "paragraph", "content": [ { "type": "text", "text": "Deployed to staging." } ] }
            ]
        }
    });

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/TEST-123/comment"))
      .and(basic_auth("test_user", "test_token"))
      .and(body_json(&expected_body))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "id": "10003",
          "body": expected_body["body"].clone(),
          "created": "2021-01-19T08:00:00.000+0000"
      })))
      .mount(&mock_server)
      .await;

    let comment = client.add_comment("TEST-123", "Deployed to staging.").await?;

    assert_eq!(comment.id, "10003");
    assert_eq!(comment.body.to_plain_text(), "Deployed to staging.");

    Ok(())
  }

  #[tokio::test]
  async fn test_add_comment_issue_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/NOPE-1/comment"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "errorMessages": ["Issue does not exist or you do not have permission to see it."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.add_comment("NOPE-1", "hello").await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));

    Ok(())
  }
}
