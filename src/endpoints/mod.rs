//! # Jira API Endpoints
//!
//! Organized endpoint implementations for different Jira API resource types:
//! issues, search, comments, worklogs, create-metadata, dev-info, and
//! transition management.

pub mod comments;
pub mod create_meta;
pub mod dev_info;
pub mod issues;
pub mod search;
pub mod transitions;
pub mod worklogs;
