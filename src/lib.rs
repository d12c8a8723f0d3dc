//! # Jira API Client
//!
//! Typed models and REST client for the Atlassian Jira Cloud API. Covers
//! issue fetch/create/search, comments, worklogs, workflow transitions,
//! create-metadata, and the dev-info panel, with serde shapes that preserve
//! Jira's quirks: plain-string versus rich-document bodies, array versus
//! wrapped worklog containers, offset versus cursor search pagination, and
//! dynamically-added custom fields.

mod client;
mod consts;
mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export the decode error
pub use error::DecodeError;
// Re-export models
pub use models::{
  AdfDocument, AdfNode, Comment, CommentBody, CommentPage, CreateCommentRequest, CreateIssueRequest,
  CreateIssueResult, CreateMetaIssueType, CreateMetaResponse, DevInfoDetail, DevInfoSummary, FieldMeta, Issue,
  IssueFields, IssueLink, JiraAuth, SearchPagination, SearchResult, Status, Transition, User, Worklog,
  WorklogContainer,
};
