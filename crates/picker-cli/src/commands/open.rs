//! Open command implementation
//!
//! Runs the picker flow and launches an editor on the chosen repository.

use std::path::{Path, PathBuf};
use std::process::Command;

use colored::Colorize;
use picker_core::{PickOutcome, RepositoryPicker, WorkspaceOpener};
use picker_source::GhqSource;

use crate::cli::OpenArgs;
use crate::context::AppContext;
use crate::error::Result;
use crate::interactive::TerminalPresenter;

/// An editor that can open a folder from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Editor {
    /// Name used in settings and on the command line
    pub slug: &'static str,
    /// Executable looked up on PATH
    pub binary: &'static str,
    /// Display name
    pub name: &'static str,
    /// Flag forcing a new window
    pub new_window_flag: &'static str,
    /// Flag reusing the current window
    pub reuse_window_flag: &'static str,
}

impl Editor {
    /// Arguments that open `path` in this editor.
    pub fn args(&self, path: &Path, new_window: bool) -> Vec<String> {
        let flag = if new_window {
            self.new_window_flag
        } else {
            self.reuse_window_flag
        };
        vec![flag.to_string(), path.display().to_string()]
    }
}

/// Known editors, in auto-detection order
pub const EDITORS: &[Editor] = &[
    Editor {
        slug: "vscode",
        binary: "code",
        name: "VS Code",
        new_window_flag: "--new-window",
        reuse_window_flag: "--reuse-window",
    },
    Editor {
        slug: "cursor",
        binary: "cursor",
        name: "Cursor",
        new_window_flag: "--new-window",
        reuse_window_flag: "--reuse-window",
    },
    Editor {
        slug: "zed",
        binary: "zed",
        name: "Zed",
        new_window_flag: "--new",
        reuse_window_flag: "--add",
    },
];

/// Find the full path of a binary on PATH (cross-platform)
fn which(binary: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    let exts: &[&str] = if cfg!(windows) {
        &[".exe", ".cmd", ".bat", ""]
    } else {
        &[""]
    };

    std::env::split_paths(&path_var)
        .flat_map(|dir| exts.iter().map(move |ext| dir.join(format!("{binary}{ext}"))))
        .find(|candidate| candidate.is_file())
}

/// Look up an editor by slug or binary name, without checking PATH.
fn find_editor(name: &str) -> Option<&'static Editor> {
    EDITORS
        .iter()
        .find(|editor| editor.slug == name || editor.binary == name)
}

/// Resolve the editor to launch and where its executable lives.
///
/// With a preference, that editor must exist and be installed. Without one,
/// the first installed editor from [`EDITORS`] wins.
fn resolve_editor(
    preference: Option<&str>,
) -> std::result::Result<(&'static Editor, PathBuf), String> {
    match preference {
        Some(name) => {
            let editor = find_editor(name).ok_or_else(|| {
                format!(
                    "Unknown editor '{}'. Supported: {}",
                    name,
                    EDITORS.iter().map(|e| e.slug).collect::<Vec<_>>().join(", ")
                )
            })?;
            let binary = which(editor.binary).ok_or_else(|| {
                format!(
                    "Editor '{}' is not installed or `{}` is not on PATH.",
                    editor.slug, editor.binary
                )
            })?;
            Ok((editor, binary))
        }
        None => EDITORS
            .iter()
            .find_map(|editor| which(editor.binary).map(|binary| (editor, binary)))
            .ok_or_else(|| {
                "No supported editor found on PATH. Install code (VS Code), cursor, or zed."
                    .to_string()
            }),
    }
}

/// [`WorkspaceOpener`] launching an editor process.
///
/// The editor is resolved when a repository is actually opened, so a missing
/// editor never hides `ghq` problems.
pub struct EditorOpener {
    preference: Option<String>,
}

impl EditorOpener {
    pub fn new(preference: Option<String>) -> Self {
        Self { preference }
    }
}

impl WorkspaceOpener for EditorOpener {
    fn open(&self, path: &Path, new_window: bool) -> picker_core::Result<()> {
        let (editor, binary) = resolve_editor(self.preference.as_deref())
            .map_err(|message| picker_core::Error::open(path, message))?;
        let args = editor.args(path, new_window);

        tracing::debug!("$ {} {}", binary.display(), args.join(" "));
        println!(
            "{} Launching {} ...",
            "=>".blue().bold(),
            editor.name.cyan()
        );

        launch(&binary, &args, path)
    }
}

/// Run an editor launcher and wait for it to hand the folder over.
///
/// The `code`, `cursor` and `zed` launchers return as soon as the editor has
/// taken the request, so a non-zero exit means nothing was opened.
fn launch(binary: &Path, args: &[String], path: &Path) -> picker_core::Result<()> {
    let name = binary.display();
    let status = Command::new(binary).args(args).status().map_err(|e| {
        picker_core::Error::open(path, format!("failed to launch '{}': {}", name, e))
    })?;

    if !status.success() {
        return Err(picker_core::Error::open(
            path,
            format!("'{}' exited with {}", name, status),
        ));
    }

    Ok(())
}

/// Run the open command
///
/// Lists repositories, prompts for one, opens it and records it as the most
/// recently opened.
pub fn run_open(ctx: &AppContext, args: &OpenArgs) -> Result<()> {
    let mut settings = ctx.settings.clone();
    args.apply(&mut settings);
    tracing::debug!(?settings, "effective settings");

    let source = GhqSource::new(settings.ghq.clone());
    let store = ctx.store();
    let presenter = TerminalPresenter::new();
    let opener = EditorOpener::new(settings.editor.clone());

    let outcome = RepositoryPicker::new(&source, &store, &presenter, &opener)
        .with_settings(&settings)
        .run()?;

    match outcome {
        PickOutcome::Opened { repo, path } => {
            tracing::info!(repo = %repo, "opened repository");
            println!(
                "{} Opened {} ({})",
                "OK".green().bold(),
                repo.cyan(),
                path.display().to_string().dimmed()
            );
        }
        PickOutcome::NoRepositories => {
            println!(
                "{} `{} list` returned no repositories.",
                "info:".blue().bold(),
                settings.ghq
            );
        }
        PickOutcome::Cancelled => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editors_list_not_empty() {
        assert!(!EDITORS.is_empty());
    }

    #[test]
    fn test_find_editor_by_slug_or_binary() {
        assert_eq!(find_editor("vscode").map(|e| e.binary), Some("code"));
        assert_eq!(find_editor("code").map(|e| e.slug), Some("vscode"));
        assert!(find_editor("emacs").is_none());
    }

    #[test]
    fn test_editor_args_follow_window_mode() {
        let code = find_editor("vscode").unwrap();
        let path = Path::new("/home/me/ghq/github.com/a/b");

        assert_eq!(
            code.args(path, true),
            vec!["--new-window", "/home/me/ghq/github.com/a/b"]
        );
        assert_eq!(
            code.args(path, false),
            vec!["--reuse-window", "/home/me/ghq/github.com/a/b"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_which_finds_known_binary() {
        assert!(which("sh").is_some(), "sh should be on PATH");
    }

    #[test]
    fn test_which_returns_none_for_nonexistent() {
        assert!(which("nonexistent_binary_that_does_not_exist_12345").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_reports_non_zero_exit() {
        let binary = which("false").expect("false should be on PATH");
        let err = launch(&binary, &[], Path::new("/tmp/repo")).unwrap_err();

        assert!(matches!(err, picker_core::Error::Open { .. }));
        assert!(err.to_string().contains("exited with"));
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_succeeds_on_zero_exit() {
        let binary = which("true").expect("true should be on PATH");
        assert!(launch(&binary, &["--new-window".to_string()], Path::new("/tmp/repo")).is_ok());
    }

    #[test]
    fn test_resolve_editor_unknown() {
        let err = resolve_editor(Some("emacs")).unwrap_err();
        assert!(err.contains("Unknown editor"));
    }

    #[test]
    fn test_opener_reports_unknown_editor_as_open_failure() {
        let opener = EditorOpener::new(Some("emacs".into()));
        let err = opener.open(Path::new("/tmp/repo"), true).unwrap_err();

        assert!(matches!(err, picker_core::Error::Open { .. }));
        assert!(err.to_string().contains("Unknown editor"));
    }
}
