//! Workflow transition models.

use serde::{Deserialize, Serialize};

use crate::models::issue::Status;

/// Represents a workflow transition available on an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transition {
  pub id: String,
  pub name: String,
  /// The status the issue lands in after this transition.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub to: Option<Status>,
}

/// Envelope of the transitions list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionList {
  pub transitions: Vec<Transition>,
}

/// Request payload for performing a transition.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionRef,
}

/// Reference to a transition by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionRef {
  pub id: String,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_transition_list_deserialization() {
    let json = json!({
        "transitions": [
            { "id": "11", "name": "To Do", "to": { "id": "10000", "name": "To Do" } },
            { "id": "21", "name": "In Progress" },
            { "id": "31", "name": "Done" }
        ]
    });

    let list: TransitionList = serde_json::from_value(json).unwrap();

    assert_eq!(list.transitions.len(), 3);
    assert_eq!(list.transitions[0].to.as_ref().unwrap().name, "To Do");
    assert_eq!(list.transitions[2].id, "31");
  }

  #[test]
  fn test_transition_request_serialization() {
    let request = TransitionRequest {
      transition: TransitionRef { id: "21".to_string() },
    };

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json, json!({ "transition": { "id": "21" } }));
  }
}
