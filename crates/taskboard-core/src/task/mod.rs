//! Task domain module.
//!
//! This module contains the task-related domain models and the service
//! interface the board talks to.
//!
//! # Module Structure
//!
//! - `model`: Core task domain models (`Task`, `Draft`)
//! - `service`: Task service trait for the remote CRUD operations

mod model;
pub mod service;

// Re-export public API
pub use model::{Draft, Task};

pub use service::TaskService;
