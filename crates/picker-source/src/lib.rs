//! Repository source for ghq-picker
//!
//! This crate wraps the external `ghq` tool, which knows where repositories
//! are cloned. It handles:
//!
//! - Invoking `ghq root` and `ghq list` as subprocesses
//! - Parsing their line-oriented output
//! - Telling a missing executable apart from a failed run
//!
//! The [`RepositorySource`] trait is the seam the picker flow depends on, so
//! the flow can be driven without a real `ghq` installation.

pub mod error;
pub mod ghq;
pub mod parse;

use std::path::PathBuf;

pub use error::{Result, SourceError};
pub use ghq::GhqSource;
pub use parse::{parse_repository_list, parse_root};

/// A provider of locally cloned repositories.
pub trait RepositorySource {
    /// Absolute directory all listed repositories are relative to.
    fn root(&self) -> Result<PathBuf>;

    /// Repository identifiers relative to [`RepositorySource::root`], in the
    /// order the provider reports them.
    fn list(&self) -> Result<Vec<String>>;
}
