//! `taskboard add` - compose a new task and submit it.

use super::utils::{open_board, prompt};
use anyhow::{Result, bail};
use colored::Colorize;

pub async fn run(
    base_url: Option<String>,
    title: Option<String>,
    task: Option<String>,
) -> Result<()> {
    let mut board = open_board(base_url)?;

    let title = match title {
        Some(title) => title,
        None => prompt("Title: ", None)?,
    };
    let task = match task {
        Some(task) => task,
        None => prompt("Task to be done: ", None)?,
    };
    board.set_title(title);
    board.set_description(task);

    match board.submit().await {
        Ok(()) => {
            println!("{}", "Task added".green());
            Ok(())
        }
        Err(err) if err.is_validation() => bail!("Both Title and Task are required"),
        Err(err) => bail!("{}", err.user_message()),
    }
}
