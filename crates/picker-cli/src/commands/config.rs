//! Config command implementation

use colored::Colorize;
use serde_json::json;

use crate::context::AppContext;
use crate::error::Result;

/// Run the config command
///
/// With `init`, writes the current settings to `config.toml` unless the file
/// already exists.
pub fn run_config(ctx: &AppContext, json: bool, init: bool) -> Result<()> {
    let config_file = ctx.paths.config_file();

    if init {
        if config_file.exists() {
            println!(
                "{} {} already exists, leaving it untouched.",
                "=>".blue().bold(),
                config_file.display()
            );
        } else {
            ctx.settings.save(&config_file)?;
            tracing::info!(path = %config_file.display(), "wrote default settings");
            println!(
                "{} Wrote {}",
                "OK".green().bold(),
                config_file.display().to_string().cyan()
            );
        }
    }

    if json {
        let report = json!({
            "config_dir": ctx.paths.dir(),
            "config_file": config_file,
            "state_file": ctx.paths.state_file(),
            "log_file": ctx.paths.log_file(),
            "settings": ctx.settings,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Files".bold());
    println!("  {:<8} {}", "config".dimmed(), config_file.display());
    println!("  {:<8} {}", "state".dimmed(), ctx.paths.state_file().display());
    println!("  {:<8} {}", "log".dimmed(), ctx.paths.log_file().display());
    println!();
    println!("{}", "Settings".bold());
    print!("{}", toml::to_string_pretty(&ctx.settings)?);

    Ok(())
}
