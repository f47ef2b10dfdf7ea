//! REST transport for the task board.

pub mod rest;

pub use rest::RestTaskService;
