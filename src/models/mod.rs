//! # Jira Resource Models
//!
//! Serde shapes for the Jira REST resources this crate talks to. Each module
//! covers one logical resource; everything is a plain value type that is
//! decoded per response, read, and discarded.

mod comment;
mod create_meta;
pub(crate) mod de;
mod dev_info;
mod document;
mod issue;
mod search;
mod transition;
mod user;
mod worklog;

pub use comment::{Comment, CommentBody, CommentPage, CreateCommentRequest, Visibility};
pub use create_meta::{
  AllowedValue, CreateIssueRequest, CreateIssueResult, CreateMetaIssueType, CreateMetaIssueTypePage,
  CreateMetaProject, CreateMetaResponse, ErrorCollection, FieldMeta, FieldSchema, NestedTransitionResult,
};
pub use dev_info::{
  DevInfoActor, DevInfoBranch, DevInfoBranchRef, DevInfoCategory, DevInfoCommit, DevInfoDetail,
  DevInfoDetailResponse, DevInfoInstanceType, DevInfoOverall, DevInfoPullRequest, DevInfoRepository,
  DevInfoReviewer, DevInfoSummary, DevInfoSummaryResponse,
};
pub use document::{AdfDocument, AdfNode, DocType};
pub use issue::{
  Attachment, Component, Issue, IssueFields, IssueLink, IssueLinkType, IssueType, LinkedIssue, LinkedIssueFields,
  Priority, Project, ProjectCategory, Status, StatusCategory, TimeTracking, Version, Watches,
};
pub use search::{SearchPagination, SearchResult};
pub use transition::{Transition, TransitionList, TransitionRef, TransitionRequest};
pub use user::User;
pub use worklog::{Worklog, WorklogContainer, WorklogPage};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}
