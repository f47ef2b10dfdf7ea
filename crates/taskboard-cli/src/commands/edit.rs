//! `taskboard edit` - copy an entry into the form, re-prompt, resubmit.

use super::utils::{open_board, prompt, render};
use anyhow::{Result, bail};
use colored::Colorize;

pub async fn run(base_url: Option<String>, id: &str) -> Result<()> {
    let mut board = open_board(base_url)?;

    if let Err(err) = board.load().await {
        bail!("{}", err.user_message());
    }
    board.edit(id)?;

    let title = prompt("Title: ", Some(&board.draft().title))?;
    let task = prompt("Task to be done: ", Some(&board.draft().task))?;
    board.set_title(title);
    board.set_description(task);

    match board.submit().await {
        Ok(()) => {
            println!("{}", "Task updated".green());
            render(&board);
            Ok(())
        }
        Err(err) if err.is_validation() => bail!("Both Title and Task are required"),
        Err(err) => bail!("{}", err.user_message()),
    }
}
