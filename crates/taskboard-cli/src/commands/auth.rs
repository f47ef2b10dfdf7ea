//! `taskboard login` / `taskboard logout` - manage the stored API token.

use super::utils::prompt;
use anyhow::{Result, bail};
use colored::Colorize;
use taskboard_core::session::TokenStore;
use taskboard_infrastructure::FileTokenStore;

pub fn login(token: Option<String>) -> Result<()> {
    let store = FileTokenStore::new_default()?;

    let token = match token {
        Some(token) => token,
        None => prompt("Token: ", None)?,
    };
    if token.is_empty() {
        bail!("A token is required");
    }

    store.save(&token)?;
    println!("{}", "Logged in".green());
    Ok(())
}

pub fn logout() -> Result<()> {
    let store = FileTokenStore::new_default()?;
    store.clear()?;
    println!("Logged out");
    Ok(())
}
