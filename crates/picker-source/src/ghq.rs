//! Subprocess execution of the `ghq` CLI
//!
//! Every invocation is recorded through `tracing`: the command line and raw
//! output at debug level, failures at warn level. The CLI routes these
//! events into its persistent diagnostic log.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use crate::RepositorySource;
use crate::error::{Result, SourceError};
use crate::parse::{parse_repository_list, parse_root};

/// Default executable name
pub const DEFAULT_PROGRAM: &str = "ghq";

/// [`RepositorySource`] backed by the `ghq` executable
#[derive(Debug, Clone)]
pub struct GhqSource {
    /// Program to invoke: a name resolved through PATH, or a path
    program: String,
}

impl GhqSource {
    /// Create a source invoking `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program this source invokes.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `ghq <args>` and return its stdout with surrounding whitespace removed.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        let command_line = format_command_line(&self.program, args);
        tracing::debug!(target: "picker_source::diagnostics", "$ {}", command_line);

        let output = Command::new(&self.program).args(args).output().map_err(|e| {
            let err = if e.kind() == ErrorKind::NotFound {
                SourceError::ToolNotFound {
                    program: self.program.clone(),
                }
            } else {
                SourceError::ToolFailed {
                    program: self.program.clone(),
                    message: e.to_string(),
                }
            };
            tracing::warn!(target: "picker_source::diagnostics", "ERROR: {}", err);
            err
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("{} exited with {}", command_line, output.status)
            } else {
                stderr
            };
            let err = SourceError::ToolFailed {
                program: self.program.clone(),
                message,
            };
            tracing::warn!(target: "picker_source::diagnostics", "ERROR: {}", err);
            return Err(err);
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::debug!(
            target: "picker_source::diagnostics",
            "{}",
            if stdout.is_empty() { "(no output)" } else { stdout.as_str() }
        );
        Ok(stdout)
    }
}

impl Default for GhqSource {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl RepositorySource for GhqSource {
    fn root(&self) -> Result<PathBuf> {
        self.run(&["root"]).map(|out| parse_root(&out))
    }

    fn list(&self) -> Result<Vec<String>> {
        self.run(&["list"]).map(|out| parse_repository_list(&out))
    }
}

fn format_command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
