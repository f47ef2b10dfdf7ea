//! Shared helpers for the command implementations.

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use std::sync::Arc;
use taskboard_client::RestTaskService;
use taskboard_core::TaskBoard;
use taskboard_infrastructure::{ConfigService, FileTokenStore};
use tracing_subscriber::EnvFilter;

/// Initializes stderr logging, filtered by `RUST_LOG` (default: warn).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Builds a board backed by the configured server and the stored token.
pub fn open_board(base_url: Option<String>) -> Result<TaskBoard> {
    let store = FileTokenStore::new_default()?;
    let mut config = ConfigService::new_default()?.get_config();
    if let Some(url) = base_url {
        config.base_url = url;
    }
    let service = RestTaskService::try_from_stored(&store, &config)?;
    Ok(TaskBoard::new(Arc::new(service)))
}

/// Renders the board: error banner first, then one row per task.
pub fn render(board: &TaskBoard) {
    if let Some(message) = board.error() {
        eprintln!("{}", message.red().bold());
    }

    if board.tasks().is_empty() {
        println!("{}", "No tasks".yellow());
        return;
    }

    for task in board.tasks() {
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let line = format!("{checkbox} [{}] {}: {}", task.id, task.title, task.task);
        if task.completed {
            println!("{}", line.dimmed().strikethrough());
        } else {
            println!("{line}");
        }
    }
}

/// Reads one line, optionally pre-filled with the current value.
pub fn prompt(label: &str, initial: Option<&str>) -> Result<String> {
    let mut editor = DefaultEditor::new()?;
    let line = match initial {
        Some(initial) => editor.readline_with_initial(label, (initial, ""))?,
        None => editor.readline(label)?,
    };
    Ok(line.trim().to_string())
}

/// Asks a yes/no question, defaulting to no.
pub fn confirm(question: &str) -> Result<bool> {
    let mut editor = DefaultEditor::new()?;
    let answer = editor.readline(&format!("{question} (y/N) "))?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
