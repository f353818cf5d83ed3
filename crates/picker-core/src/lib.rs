//! Core layer for ghq-picker
//!
//! This crate holds everything between the repository source and the
//! terminal front end:
//!
//! - **MRU list**: recency ordering, promotion and the recent/remaining partition
//! - **Pick items**: the sectioned list shown to the user
//! - **State store**: persistence of the MRU list behind an injectable trait
//! - **Settings**: the user's configuration file and directory layout
//! - **Flow**: the list → pick → open → remember sequence
//!
//! # Architecture
//!
//! ```text
//!                 picker-cli
//!                     |
//!                picker-core
//!                     |
//!          +----------+----------+
//!          |                     |
//!      picker-fs          picker-source
//! ```

pub mod config;
pub mod error;
pub mod flow;
pub mod items;
pub mod mru;
pub mod state;

pub use config::{PickerPaths, Settings};
pub use error::{Error, Result};
pub use flow::{PickOutcome, RepositoryPicker, SelectionPresenter, WorkspaceOpener};
pub use items::{PickItem, build_items};
pub use mru::{Partition, forget, partition, record_opened, uniq_preserve_order};
pub use state::{MRU_KEY, JsonStateStore, MemoryStore, MruStore};
