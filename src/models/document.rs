//! # Atlassian Document Format
//!
//! Jira's structured rich-text representation, used for comment bodies and
//! issue descriptions. A document is a tree of typed content nodes; this
//! module keeps node attributes and marks opaque rather than enumerating
//! every node type Jira supports.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Literal `"doc"` type tag carried by every rich-text document.
///
/// Modeled as a single-variant enum so that decoding rejects any other value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DocType {
  #[default]
  #[serde(rename = "doc")]
  Doc,
}

/// Represents a Jira rich-text document (Atlassian Document Format).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdfDocument {
  pub version: u32,
  #[serde(rename = "type")]
  pub doc_type: DocType,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub content: Vec<AdfNode>,
}

/// One node in a rich-text document tree.
///
/// Nodes carry a type tag, optional literal text (for `text` nodes), optional
/// nested content (for block nodes), and free-form `attrs`/`marks` that are
/// passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdfNode {
  #[serde(rename = "type")]
  pub node_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub content: Vec<AdfNode>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attrs: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub marks: Option<Value>,
}

impl AdfNode {
  /// A literal text node.
  pub fn text(text: impl Into<String>) -> Self {
    Self {
      node_type: "text".to_string(),
      text: Some(text.into()),
      content: Vec::new(),
      attrs: None,
      marks: None,
    }
  }

  /// A paragraph wrapping the given child nodes.
  pub fn paragraph(content: Vec<AdfNode>) -> Self {
    Self {
      node_type: "paragraph".to_string(),
      text: None,
      content,
      attrs: None,
      marks: None,
    }
  }
}

impl AdfDocument {
  /// Build a single-paragraph document wrapping `text` as one text node.
  ///
  /// This is the canonical conversion for write endpoints, which require the
  /// structured form even when the caller only has a plain string.
  pub fn from_text(text: &str) -> Self {
    Self {
      version: 1,
      doc_type: DocType::Doc,
      content: vec![AdfNode::paragraph(vec![AdfNode::text(text)])],
    }
  }

  /// Flatten the document to plain text, joining block nodes with newlines.
  pub fn to_plain_text(&self) -> String {
    fn collect(nodes: &[AdfNode], out: &mut Vec<String>) {
      for node in nodes {
        if let Some(text) = &node.text {
          match out.last_mut() {
            Some(last) => last.push_str(text),
            None => out.push(text.clone()),
          }
        }
        collect(&node.content, out);
      }
    }

    let mut blocks = Vec::new();
    for node in &self.content {
      let mut lines = Vec::new();
      collect(std::slice::from_ref(node), &mut lines);
      blocks.push(lines.join(""));
    }
    blocks.join("\n")
  }
}
