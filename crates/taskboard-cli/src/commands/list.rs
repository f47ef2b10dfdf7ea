//! `taskboard list` - load the board and render it.

use super::utils::{open_board, render};
use anyhow::{Result, bail};

pub async fn run(base_url: Option<String>) -> Result<()> {
    let mut board = open_board(base_url)?;

    if let Err(err) = board.load().await {
        bail!("{}", err.user_message());
    }

    render(&board);
    Ok(())
}
