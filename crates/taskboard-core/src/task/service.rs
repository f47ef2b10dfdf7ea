//! Task service trait.
//!
//! Defines the interface for the remote task CRUD operations.

use super::model::{Draft, Task};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract service for the remote task collection.
///
/// This trait defines the contract for the four CRUD operations the board
/// performs, decoupling the board's state management from the specific
/// transport (the REST client in production, a scripted double in tests).
///
/// Operations are fire-and-forget relative to each other: there is no
/// optimistic concurrency token and no conflict detection, so concurrent
/// mutations resolve last-write-wins on the server.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Fetches the full task list.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Task>)`: All tasks known to the server
    /// - `Err(_)`: Transport or authentication failure
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Creates a new task from the draft's fields.
    ///
    /// # Returns
    ///
    /// - `Ok(Task)`: The server's record, including the assigned identifier
    /// - `Err(_)`: Transport or authentication failure
    async fn create_task(&self, draft: &Draft) -> Result<Task>;

    /// Updates an existing task with the draft's fields.
    ///
    /// The target identifier travels separately; the draft's own `id` is
    /// ignored here.
    ///
    /// # Returns
    ///
    /// - `Ok(Task)`: The server's updated record
    /// - `Err(_)`: Transport or authentication failure
    async fn update_task(&self, id: &str, draft: &Draft) -> Result<Task>;

    /// Deletes a task by identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Task deleted
    /// - `Err(_)`: Transport or authentication failure
    async fn delete_task(&self, id: &str) -> Result<()>;
}
