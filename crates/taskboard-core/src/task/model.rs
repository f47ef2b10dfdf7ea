//! Task domain model.
//!
//! This module contains the core Task entity and the Draft value object that
//! represents the form's in-progress record.

use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// A server-persisted to-do record.
///
/// The identifier is assigned by the server and is only present once the
/// server has acknowledged creation. On the wire it is named `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned opaque identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Short title shown in the list.
    pub title: String,
    /// Free-text description. The wire name is `task`.
    pub task: String,
    /// Completion flag, toggled from the list.
    #[serde(default)]
    pub completed: bool,
}

/// The task record currently being composed or edited in the form.
///
/// A draft for a brand-new task has no identifier; a draft produced by an
/// edit action carries the identifier of the record being edited, which is
/// what routes a later submit to an update instead of a create.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    /// Identifier of the record being edited, absent for a new-task draft.
    pub id: Option<String>,
    pub title: String,
    pub task: String,
    pub completed: bool,
}

impl Draft {
    /// Copies an existing record into the form for editing.
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id.clone()),
            title: task.title.clone(),
            task: task.task.clone(),
            completed: task.completed,
        }
    }

    /// Returns true when the draft targets an existing record.
    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Checks that both required fields are filled in.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The draft can be submitted
    /// - `Err(BoardError::Validation)`: A required field is empty; the
    ///   submission must be blocked before any request is issued
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(BoardError::validation("title"));
        }
        if self.task.is_empty() {
            return Err(BoardError::validation("task"));
        }
        Ok(())
    }

    /// Resets the form to an empty new-task draft.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: "1".to_string(),
            title: "A".to_string(),
            task: "x".to_string(),
            completed: false,
        }
    }

    #[test]
    fn test_from_task_carries_identifier() {
        let draft = Draft::from_task(&sample_task());
        assert_eq!(draft.id.as_deref(), Some("1"));
        assert_eq!(draft.title, "A");
        assert!(draft.is_editing());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let mut draft = Draft::default();
        assert!(draft.validate().unwrap_err().is_validation());

        draft.title = "A".to_string();
        assert!(draft.validate().unwrap_err().is_validation());

        draft.task = "x".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_clear_resets_to_new_task_draft() {
        let mut draft = Draft::from_task(&sample_task());
        draft.clear();
        assert_eq!(draft, Draft::default());
        assert!(!draft.is_editing());
    }

    #[test]
    fn test_task_wire_format_uses_underscore_id() {
        let json = r#"{"_id":"abc","title":"A","task":"x","completed":true}"#;
        let task: Task = serde_json::from_str(json).expect("task should deserialize");
        assert_eq!(task.id, "abc");
        assert!(task.completed);

        let round = serde_json::to_string(&task).expect("task should serialize");
        assert!(round.contains("\"_id\":\"abc\""));
    }

    #[test]
    fn test_task_completed_defaults_to_false() {
        let json = r#"{"_id":"abc","title":"A","task":"x"}"#;
        let task: Task = serde_json::from_str(json).expect("task should deserialize");
        assert!(!task.completed);
    }
}
