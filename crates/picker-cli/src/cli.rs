//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use picker_core::Settings;

/// Pick a ghq-managed repository and open it in your editor
#[derive(Parser, Debug)]
#[command(name = "ghq-pick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.toml, state.json and the diagnostic log
    #[arg(long, global = true, env = "GHQ_PICKER_HOME", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// The command to run (defaults to `open`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Pick a repository and open it (the default)
    ///
    /// Recently opened repositories are listed first.
    ///
    /// Examples:
    ///   ghq-pick                      # Same as `ghq-pick open`
    ///   ghq-pick open --reuse-window  # Replace the current editor window
    ///   ghq-pick open -e zed          # Open with Zed
    Open(OpenArgs),

    /// Show recently opened repositories, most recent first
    Recent {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Remove a repository from the recently opened list
    Forget {
        /// Repository path as listed by `ghq list`
        repo: String,
    },

    /// Forget all recently opened repositories
    ClearRecent,

    /// Show effective settings and file locations
    Config {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Write a config.toml with default settings if none exists
        #[arg(long)]
        init: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Per-invocation overrides for the picker
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenArgs {
    /// Open in a new editor window
    #[arg(long, conflicts_with = "reuse_window")]
    pub new_window: bool,

    /// Reuse the current editor window
    #[arg(long)]
    pub reuse_window: bool,

    /// Editor to use (vscode, cursor, zed)
    #[arg(short, long)]
    pub editor: Option<String>,

    /// Number of recently opened repositories to remember
    #[arg(long, value_name = "N")]
    pub max_mru: Option<usize>,
}

impl OpenArgs {
    /// Layer these overrides on top of the configured settings.
    pub fn apply(&self, settings: &mut Settings) {
        if self.new_window {
            settings.open_in_new_window = true;
        }
        if self.reuse_window {
            settings.open_in_new_window = false;
        }
        if let Some(editor) = &self.editor {
            settings.editor = Some(editor.clone());
        }
        if let Some(max) = self.max_mru {
            settings.max_mru = i64::try_from(max).unwrap_or(i64::MAX);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["ghq-pick"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_open_overrides_parse() {
        let cli = Cli::try_parse_from([
            "ghq-pick",
            "open",
            "--reuse-window",
            "--editor",
            "zed",
            "--max-mru",
            "3",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Commands::Open(OpenArgs {
                new_window: false,
                reuse_window: true,
                editor: Some("zed".into()),
                max_mru: Some(3),
            }))
        );
    }

    #[test]
    fn test_window_flags_conflict() {
        let result = Cli::try_parse_from(["ghq-pick", "open", "--new-window", "--reuse-window"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_forget_requires_repo() {
        assert!(Cli::try_parse_from(["ghq-pick", "forget"]).is_err());
        let cli = Cli::try_parse_from(["ghq-pick", "forget", "github.com/a/b"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Forget {
                repo: "github.com/a/b".into()
            })
        );
    }

    #[test]
    fn test_apply_overrides_settings() {
        let mut settings = Settings::default();
        let args = OpenArgs {
            reuse_window: true,
            editor: Some("cursor".into()),
            max_mru: Some(0),
            ..OpenArgs::default()
        };

        args.apply(&mut settings);

        assert!(!settings.open_in_new_window);
        assert_eq!(settings.editor.as_deref(), Some("cursor"));
        assert_eq!(settings.max_entries(), 0);
    }

    #[test]
    fn test_apply_without_overrides_keeps_settings() {
        let mut settings = Settings {
            open_in_new_window: false,
            ..Settings::default()
        };

        OpenArgs::default().apply(&mut settings);

        assert_eq!(settings, Settings {
            open_in_new_window: false,
            ..Settings::default()
        });
    }
}
