//! Commands managing the recently opened list

use colored::Colorize;
use picker_core::{MruStore, forget};

use crate::context::AppContext;
use crate::error::{CliError, Result};

/// Run the recent command
pub fn run_recent(ctx: &AppContext, json: bool) -> Result<()> {
    let mru = ctx.store().load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&mru)?);
        return Ok(());
    }

    if mru.is_empty() {
        println!("{}", "No recently opened repositories.".dimmed());
        return Ok(());
    }

    println!("{}", "Recently opened".bold());
    for (index, repo) in mru.iter().enumerate() {
        println!("  {:>2}. {}", index + 1, repo.cyan());
    }

    Ok(())
}

/// Run the forget command
pub fn run_forget(ctx: &AppContext, repo: &str) -> Result<()> {
    let store = ctx.store();
    let mru = store.load()?;

    if !mru.iter().any(|r| r == repo) {
        return Err(CliError::user(format!(
            "'{}' is not in the recently opened list.",
            repo
        )));
    }

    store.save(&forget(repo, &mru))?;
    tracing::info!(repo = %repo, "forgot repository");
    println!("{} Forgot {}", "OK".green().bold(), repo.cyan());
    Ok(())
}

/// Run the clear-recent command
pub fn run_clear_recent(ctx: &AppContext) -> Result<()> {
    let store = ctx.store();
    let count = store.load()?.len();

    store.save(&[])?;
    tracing::info!(count, "cleared recently opened list");
    println!(
        "{} Cleared {} recently opened repositor{}.",
        "OK".green().bold(),
        count,
        if count == 1 { "y" } else { "ies" }
    );
    Ok(())
}
