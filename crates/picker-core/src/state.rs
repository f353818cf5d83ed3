//! Persistence of the MRU list
//!
//! The picker only needs two operations from its store, so they sit behind
//! [`MruStore`]. [`JsonStateStore`] is the on-disk implementation;
//! [`MemoryStore`] backs tests.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use picker_fs::DocumentStore;
use serde_json::{Map, Value};

use crate::Result;
use crate::mru::uniq_preserve_order;

/// Key of the MRU slot inside the state document
pub const MRU_KEY: &str = "ghqStatusPicker.mru";

/// Loads and saves the MRU list.
///
/// Implementations hold a serialized copy only; uniqueness and the size bound
/// are enforced by [`crate::mru`] before anything is saved.
pub trait MruStore {
    /// The stored list, or an empty list when nothing was saved yet.
    fn load(&self) -> Result<Vec<String>>;

    /// Replace the stored list.
    fn save(&self, mru: &[String]) -> Result<()>;
}

/// JSON state document on disk, holding the MRU list under [`MRU_KEY`].
///
/// Other keys in the document are preserved on save.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    path: PathBuf,
    documents: DocumentStore,
}

impl JsonStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            documents: DocumentStore::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. An unreadable document counts as empty so a
    /// corrupted file never locks the user out of the picker.
    fn read_document(&self) -> Result<Map<String, Value>> {
        match self.documents.load_if_exists::<Map<String, Value>>(&self.path) {
            Ok(Some(document)) => Ok(document),
            Ok(None) => Ok(Map::new()),
            Err(picker_fs::Error::Parse { message, .. }) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "ignoring unreadable state file: {}",
                    message
                );
                Ok(Map::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl MruStore for JsonStateStore {
    fn load(&self) -> Result<Vec<String>> {
        let document = self.read_document()?;

        let mru: Vec<String> = match document.get(MRU_KEY) {
            Some(Value::Array(values)) => uniq_preserve_order(
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|repo| !repo.is_empty())
                    .map(str::to_string),
            ),
            Some(other) => {
                tracing::warn!("ignoring malformed MRU slot: {}", other);
                Vec::new()
            }
            None => Vec::new(),
        };

        tracing::debug!(path = %self.path.display(), entries = mru.len(), "loaded MRU list");
        Ok(mru)
    }

    fn save(&self, mru: &[String]) -> Result<()> {
        let mut document = self.read_document()?;
        document.insert(MRU_KEY.to_string(), serde_json::to_value(mru)?);

        self.documents.save(&self.path, &document)?;
        tracing::debug!(path = %self.path.display(), entries = mru.len(), "saved MRU list");
        Ok(())
    }
}

/// In-memory store that counts how often it is read and written.
#[derive(Debug, Default)]
pub struct MemoryStore {
    mru: RefCell<Vec<String>>,
    loads: Cell<usize>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mru: RefCell::new(entries.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Current contents, without counting as a load.
    pub fn entries(&self) -> Vec<String> {
        self.mru.borrow().clone()
    }

    pub fn load_count(&self) -> usize {
        self.loads.get()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl MruStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>> {
        self.loads.set(self.loads.get() + 1);
        Ok(self.mru.borrow().clone())
    }

    fn save(&self, mru: &[String]) -> Result<()> {
        self.saves.set(self.saves.get() + 1);
        *self.mru.borrow_mut() = mru.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonStateStore::new(temp.path().join("state.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let store = JsonStateStore::new(temp.path().join("state.json"));
        let mru = vec!["github.com/a/b".to_string(), "github.com/c/d".to_string()];

        store.save(&mru).unwrap();

        assert_eq!(store.load().unwrap(), mru);
    }

    #[test]
    fn test_load_drops_empty_and_non_string_entries() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(
            &path,
            r#"{"ghqStatusPicker.mru": ["a/b", "", 42, null, "c/d"]}"#,
        )
        .unwrap();

        let store = JsonStateStore::new(&path);

        assert_eq!(store.load().unwrap(), vec!["a/b", "c/d"]);
    }

    #[test]
    fn test_load_collapses_repeated_entries() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(
            &path,
            r#"{"ghqStatusPicker.mru": ["a/b", "c/d", "a/b", "c/d"]}"#,
        )
        .unwrap();

        let store = JsonStateStore::new(&path);

        assert_eq!(store.load().unwrap(), vec!["a/b", "c/d"]);
    }

    #[test]
    fn test_load_non_array_slot_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(&path, r#"{"ghqStatusPicker.mru": "a/b"}"#).unwrap();

        let store = JsonStateStore::new(&path);

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupted_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(&path, "{ truncated").unwrap();

        let store = JsonStateStore::new(&path);

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_preserves_other_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(&path, r#"{"other": {"keep": true}}"#).unwrap();

        let store = JsonStateStore::new(&path);
        store.save(&["a/b".to_string()]).unwrap();

        let document: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(document["other"]["keep"], Value::Bool(true));
        assert_eq!(document[MRU_KEY][0], "a/b");
    }

    #[test]
    fn test_memory_store_counts_access() {
        let store = MemoryStore::with_entries(["a"]);

        assert_eq!(store.load().unwrap(), vec!["a"]);
        store.save(&["b".to_string()]).unwrap();

        assert_eq!(store.load_count(), 1);
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.entries(), vec!["b"]);
    }
}
