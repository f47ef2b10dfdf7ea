//! `taskboard remove` - delete an entry after confirmation.

use super::utils::{confirm, open_board};
use anyhow::{Result, bail};
use colored::Colorize;

pub async fn run(base_url: Option<String>, id: &str, yes: bool) -> Result<()> {
    let mut board = open_board(base_url)?;

    if let Err(err) = board.load().await {
        bail!("{}", err.user_message());
    }

    if !yes && !confirm("Are you sure?")? {
        println!("Aborted");
        return Ok(());
    }

    match board.remove(id).await {
        Ok(()) => {
            println!("{}", "Task removed".green());
            Ok(())
        }
        Err(err) if err.is_not_found() => Err(err.into()),
        Err(err) => bail!("{}", err.user_message()),
    }
}
