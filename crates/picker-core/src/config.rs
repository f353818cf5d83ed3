//! User settings and on-disk layout
//!
//! Settings live in `config.toml` inside the picker's directory:
//!
//! - Linux: `~/.config/ghq-picker/`
//! - macOS: `~/Library/Application Support/ghq-picker/`
//! - Windows: `%APPDATA%\ghq-picker\`
//!
//! The directory can be overridden with `GHQ_PICKER_HOME` or `--config-dir`,
//! which is also how tests run against a throwaway directory.

use std::path::{Path, PathBuf};

use picker_fs::DocumentStore;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Directory name under the platform config directory
pub const APP_DIR: &str = "ghq-picker";
/// Environment variable overriding the picker directory
pub const HOME_ENV: &str = "GHQ_PICKER_HOME";

const CONFIG_FILE: &str = "config.toml";
const STATE_FILE: &str = "state.json";
const LOG_FILE: &str = "ghq-pick.log";

/// Files used by the picker, all inside one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerPaths {
    dir: PathBuf,
}

impl PickerPaths {
    /// Use `dir` as the picker directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the picker directory, preferring `override_dir` when given.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
            return Ok(Self::new(dir));
        }

        dirs::config_dir()
            .map(|dir| Self::new(dir.join(APP_DIR)))
            .ok_or(Error::NoConfigDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn state_file(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    /// Persistent diagnostic log
    pub fn log_file(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }
}

/// User-facing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Open the repository in a new editor window instead of reusing one
    #[serde(alias = "openInNewWindow")]
    pub open_in_new_window: bool,

    /// How many recently opened repositories to remember. Negative values
    /// behave like zero.
    #[serde(alias = "maxMRU")]
    pub max_mru: i64,

    /// Editor slug (`code`, `cursor`, `zed`); auto-detected when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Repository tool executable
    pub ghq: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            open_in_new_window: true,
            max_mru: 15,
            editor: None,
            ghq: picker_source::ghq::DEFAULT_PROGRAM.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist. A malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = DocumentStore::new()
            .load_if_exists::<Self>(path)?
            .unwrap_or_default();
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Save settings to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        DocumentStore::new().save(path, self)?;
        Ok(())
    }

    /// The MRU bound as a length.
    pub fn max_entries(&self) -> usize {
        usize::try_from(self.max_mru.max(0)).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.open_in_new_window);
        assert_eq!(settings.max_mru, 15);
        assert_eq!(settings.max_entries(), 15);
        assert_eq!(settings.editor, None);
        assert_eq!(settings.ghq, "ghq");
    }

    #[test]
    fn test_negative_bound_clamps_to_zero() {
        let settings = Settings {
            max_mru: -3,
            ..Settings::default()
        };
        assert_eq!(settings.max_entries(), 0);
    }

    #[test]
    fn test_paths_share_directory() {
        let paths = PickerPaths::new("/tmp/picker");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/picker/config.toml"));
        assert_eq!(paths.state_file(), PathBuf::from("/tmp/picker/state.json"));
        assert_eq!(paths.log_file(), PathBuf::from("/tmp/picker/ghq-pick.log"));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let paths = PickerPaths::resolve(Some(Path::new("/custom/dir"))).unwrap();
        assert_eq!(paths.dir(), Path::new("/custom/dir"));
    }
}
