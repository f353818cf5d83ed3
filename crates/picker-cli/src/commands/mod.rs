//! Command implementations for picker-cli

pub mod config;
pub mod open;
pub mod recent;

pub use config::run_config;
pub use open::run_open;
pub use recent::{run_clear_recent, run_forget, run_recent};
