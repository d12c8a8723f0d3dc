//! Comment models for issue comment endpoints.

use serde::{Deserialize, Serialize};

use crate::models::document::AdfDocument;
use crate::models::user::User;

/// Body of a comment or issue description.
///
/// The upstream API returns either a legacy plain string (API v2 payloads)
/// or a structured rich-text document (API v3). The string form is tried
/// first; an object only matches the document form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CommentBody {
  Text(String),
  Document(AdfDocument),
}

impl CommentBody {
  /// Convert into the structured document form.
  ///
  /// Write endpoints only accept the structured form, so a plain string is
  /// wrapped as a single-paragraph document.
  pub fn into_document(self) -> AdfDocument {
    match self {
      CommentBody::Text(text) => AdfDocument::from_text(&text),
      CommentBody::Document(doc) => doc,
    }
  }

  /// Flatten to plain text regardless of which form arrived.
  pub fn to_plain_text(&self) -> String {
    match self {
      CommentBody::Text(text) => text.clone(),
      CommentBody::Document(doc) => doc.to_plain_text(),
    }
  }
}

/// Visibility restriction on a comment or worklog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visibility {
  #[serde(rename = "type")]
  pub restriction_type: String,
  pub value: String,
}

/// Represents a single issue comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  pub id: String,
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<User>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub update_author: Option<User>,
  pub body: CommentBody,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub visibility: Option<Visibility>,
}

/// A paginated list of comments (offset pagination).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
  pub comments: Vec<Comment>,
  #[serde(default)]
  pub start_at: u32,
  #[serde(default)]
  pub max_results: u32,
  #[serde(default)]
  pub total: u32,
}

/// Request payload for adding a comment to an issue.
///
/// The body is always transmitted in document form.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCommentRequest {
  pub body: AdfDocument,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub visibility: Option<Visibility>,
}

impl CreateCommentRequest {
  /// Build a request from plain text.
  pub fn from_text(text: &str) -> Self {
    Self {
      body: AdfDocument::from_text(text),
      visibility: None,
    }
  }

  /// Build a request from either body form, converting strings to documents.
  pub fn from_body(body: CommentBody) -> Self {
    Self {
      body: body.into_document(),
      visibility: None,
    }
  }
}
