//! Tracing setup
//!
//! Two sinks: stderr for the user (quiet unless `--verbose` or `RUST_LOG`),
//! and an append-only diagnostic log file that always records debug events,
//! including every `ghq` command line and its raw output.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default stderr filter. Subprocess diagnostics go to the log file only;
/// failures reach the user through the returned error.
const DEFAULT_STDERR_FILTER: &str = "warn,picker_source::diagnostics=off";

/// Initialize the global subscriber.
///
/// Failing to open the log file is not fatal: stderr logging still works and
/// the problem is reported as a warning.
pub fn init(
    verbose: bool,
    log_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stderr_filter = if verbose {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_STDERR_FILTER))?
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .with_filter(stderr_filter);

    let (file, open_error) = match log_file.map(open_log_file) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let file_layer = file.map(|file| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_filter(LevelFilter::DEBUG)
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    if let (Some(path), Some(e)) = (log_file, open_error) {
        tracing::warn!("diagnostic log disabled, cannot open {}: {}", path.display(), e);
    }

    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
