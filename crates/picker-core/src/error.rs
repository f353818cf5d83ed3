//! Error types for picker-core

use std::path::PathBuf;

/// Result type for picker-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in picker-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No usable configuration directory on this platform
    #[error(
        "Could not determine a configuration directory. Set GHQ_PICKER_HOME or pass --config-dir."
    )]
    NoConfigDir,

    /// The selection prompt failed
    #[error("Selection failed: {message}")]
    Presenter { message: String },

    /// The workspace could not be opened
    #[error("Failed to open {path}: {message}")]
    Open { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Repository source error from picker-source
    #[error(transparent)]
    Source(#[from] picker_source::SourceError),

    /// Filesystem error from picker-fs
    #[error(transparent)]
    Fs(#[from] picker_fs::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn presenter(message: impl Into<String>) -> Self {
        Self::Presenter {
            message: message.into(),
        }
    }

    pub fn open(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Open {
            path: path.into(),
            message: message.into(),
        }
    }
}
