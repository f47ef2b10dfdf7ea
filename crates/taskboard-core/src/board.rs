//! The TaskBoard state container.
//!
//! `TaskBoard` owns the in-memory task list, the form draft, and the error
//! banner, and drives the remote CRUD operations through an injected
//! [`TaskService`]. The hosting shell decides when to call [`TaskBoard::load`]
//! and owns any interactive confirmation before [`TaskBoard::remove`].

use crate::error::{BoardError, Result};
use crate::task::{Draft, Task, TaskService};
use std::sync::Arc;

/// The central state manager for the task board.
///
/// Holds one flat list of server records plus the form's draft. Each
/// operation issues at most one request; requests are not serialized or
/// queued against each other, and failures are terminal for that single
/// operation.
pub struct TaskBoard {
    /// Remote task collection, injected at construction.
    service: Arc<dyn TaskService>,
    /// All tasks currently known to this board instance.
    tasks: Vec<Task>,
    /// The form's current in-progress record.
    draft: Draft,
    /// Last request failure's user-facing text, if any.
    error: Option<String>,
}

impl TaskBoard {
    /// Creates a board with an empty list and a fresh draft.
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        Self {
            service,
            tasks: Vec::new(),
            draft: Draft::default(),
            error: None,
        }
    }

    // ============================================================================
    // Read accessors
    // ============================================================================

    /// The tasks currently held by the board.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The form's current draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The error banner text, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true when the draft targets an existing record.
    pub fn is_editing(&self) -> bool {
        self.draft.is_editing()
    }

    // ============================================================================
    // Form binding
    // ============================================================================

    /// Binds the form's title field into the draft.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Binds the form's description field into the draft.
    pub fn set_description(&mut self, task: impl Into<String>) {
        self.draft.task = task.into();
    }

    // ============================================================================
    // Operations
    // ============================================================================

    /// Requests the full task list and replaces local state with it.
    ///
    /// This is the explicit entry point the hosting shell calls before
    /// rendering. On failure the list remains whatever it was (empty on a
    /// first failure) and the error banner is set.
    pub async fn load(&mut self) -> Result<()> {
        match self.service.list_tasks().await {
            Ok(tasks) => {
                self.tasks = tasks;
                Ok(())
            }
            Err(err) => Err(self.record_failure(err)),
        }
    }

    /// Submits the draft.
    ///
    /// An empty title or description blocks the submission locally: no
    /// request is issued, the list and the error banner are untouched, and
    /// the validation error is returned for the shell to surface as a
    /// blocking notice.
    ///
    /// A draft with an identifier is sent as an update and the matching
    /// entry is replaced with the server's returned record; otherwise the
    /// draft is sent as a create and the server's record is appended. The
    /// draft is cleared on success.
    pub async fn submit(&mut self) -> Result<()> {
        self.draft.validate()?;

        let result = match self.draft.id.clone() {
            Some(id) => match self.service.update_task(&id, &self.draft).await {
                Ok(updated) => {
                    self.replace_entry(updated);
                    Ok(())
                }
                Err(err) => Err(err),
            },
            None => match self.service.create_task(&self.draft).await {
                Ok(created) => {
                    self.tasks.push(created);
                    Ok(())
                }
                Err(err) => Err(err),
            },
        };

        match result {
            Ok(()) => {
                self.draft.clear();
                Ok(())
            }
            Err(err) => Err(self.record_failure(err)),
        }
    }

    /// Flips the completion flag of the target entry.
    ///
    /// Sends the full updated record and replaces the local entry with the
    /// server's response on success. An unknown identifier is a local error;
    /// no request is issued.
    pub async fn toggle(&mut self, id: &str) -> Result<()> {
        let target = self
            .find_task(id)
            .ok_or_else(|| BoardError::not_found("task", id))?;

        let mut updated = Draft::from_task(target);
        updated.completed = !target.completed;

        match self.service.update_task(id, &updated).await {
            Ok(task) => {
                self.replace_entry(task);
                Ok(())
            }
            Err(err) => Err(self.record_failure(err)),
        }
    }

    /// Copies the selected entry into the draft for editing. No request.
    pub fn edit(&mut self, id: &str) -> Result<()> {
        let target = self
            .find_task(id)
            .ok_or_else(|| BoardError::not_found("task", id))?;
        self.draft = Draft::from_task(target);
        Ok(())
    }

    /// Deletes the entry and removes it from local state on success.
    ///
    /// Interactive confirmation is owned by the hosting shell; this method
    /// is only invoked once the user has confirmed.
    pub async fn remove(&mut self, id: &str) -> Result<()> {
        if self.find_task(id).is_none() {
            return Err(BoardError::not_found("task", id));
        }

        match self.service.delete_task(id).await {
            Ok(()) => {
                self.tasks.retain(|task| task.id != id);
                Ok(())
            }
            Err(err) => Err(self.record_failure(err)),
        }
    }

    /// Clears tasks, draft, and the error banner.
    ///
    /// Called by the shell after logout to reload the view from scratch.
    pub fn reset(&mut self) {
        self.tasks.clear();
        self.draft.clear();
        self.error = None;
    }

    // ============================================================================
    // Internals
    // ============================================================================

    fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Replaces the entry matching the record's identifier, if present.
    fn replace_entry(&mut self, updated: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|task| task.id == updated.id) {
            *slot = updated;
        }
    }

    /// Stores the failure's user-facing text in the banner and hands the
    /// error back for the caller to propagate.
    fn record_failure(&mut self, err: BoardError) -> BoardError {
        self.error = Some(err.user_message());
        err
    }
}
