//! `taskboard toggle` - flip an entry's completion flag.

use super::utils::{open_board, render};
use anyhow::{Result, bail};

pub async fn run(base_url: Option<String>, id: &str) -> Result<()> {
    let mut board = open_board(base_url)?;

    if let Err(err) = board.load().await {
        bail!("{}", err.user_message());
    }

    match board.toggle(id).await {
        Ok(()) => {
            render(&board);
            Ok(())
        }
        Err(err) if err.is_not_found() => Err(err.into()),
        Err(err) => bail!("{}", err.user_message()),
    }
}
