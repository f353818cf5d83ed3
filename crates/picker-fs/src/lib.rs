//! Filesystem layer for ghq-picker
//!
//! Provides atomic, lock-protected writes and format-aware loading and
//! saving of the small documents the picker keeps on disk (settings and
//! persisted state).

pub mod error;
pub mod io;
pub mod store;

pub use error::{Error, Result};
pub use store::{DocumentFormat, DocumentStore};
