//! Invocation context: where the picker keeps its files and what the user
//! configured.

use picker_core::{JsonStateStore, PickerPaths, Settings};

use crate::error::Result;

/// Settings and file locations for one invocation
#[derive(Debug, Clone)]
pub struct AppContext {
    pub paths: PickerPaths,
    pub settings: Settings,
}

impl AppContext {
    /// Load the settings file under `paths` (defaults when it is missing).
    pub fn load(paths: PickerPaths) -> Result<Self> {
        let settings = Settings::load(&paths.config_file())?;
        Ok(Self { paths, settings })
    }

    /// Store for the recently opened list.
    pub fn store(&self) -> JsonStateStore {
        JsonStateStore::new(self.paths.state_file())
    }
}
