//! Error types for repository source operations

/// Errors that can occur while querying the repository tool
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The tool's executable could not be located
    #[error("`{program}` was not found. Install {program} and make sure it is on your PATH.")]
    ToolNotFound {
        /// The program that was invoked
        program: String,
    },

    /// The tool ran (or could not be started) and reported a failure
    #[error("`{program}` failed: {message}")]
    ToolFailed {
        /// The program that was invoked
        program: String,
        /// Diagnostic text from the tool
        message: String,
    },
}

impl SourceError {
    /// True when the tool executable is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ToolNotFound { .. })
    }
}

/// Result type alias for repository source operations
pub type Result<T> = std::result::Result<T, SourceError>;
