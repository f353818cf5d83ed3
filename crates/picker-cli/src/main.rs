//! ghq-pick
//!
//! Lists repositories managed by ghq, recently opened ones first, and opens
//! the chosen one in an editor.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod logging;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use picker_core::PickerPaths;

use cli::{Cli, Commands, OpenArgs};
use context::AppContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        tracing::error!("{}", e);
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        return Ok(());
    }

    let paths = PickerPaths::resolve(cli.config_dir.as_deref())?;

    if let Err(e) = logging::init(cli.verbose, Some(&paths.log_file())) {
        eprintln!("{} logging disabled: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!(dir = %paths.dir().display(), "using picker directory");

    let ctx = AppContext::load(paths)?;
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Open(OpenArgs::default()));

    execute_command(command, &ctx)
}

fn execute_command(cmd: Commands, ctx: &AppContext) -> Result<()> {
    match cmd {
        Commands::Open(args) => commands::run_open(ctx, &args),
        Commands::Recent { json } => commands::run_recent(ctx, json),
        Commands::Forget { repo } => commands::run_forget(ctx, &repo),
        Commands::ClearRecent => commands::run_clear_recent(ctx),
        Commands::Config { json, init } => commands::run_config(ctx, json, init),
        Commands::Completions { .. } => Ok(()),
    }
}
