//! Preference store backed by a JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::repositories::PreferenceStore;
use crate::error::StoreError;
use crate::infrastructure::write_atomic;

/// Stores preferences as a flat JSON object, e.g.
/// `{ "selected-theme": "dark" }`.
///
/// A missing file reads as an empty store; the file and its parent
/// directories are created on the first write. Writes replace the file
/// atomically. A corrupt file fails reads but is overwritten by the next
/// write, so one bad write cannot lock the store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StoreError::Serialization(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Preferences file is corrupt, starting from empty"
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        let content = serde_json::to_string_pretty(&values)?;
        write_atomic(&self.path, &content)?;
        tracing::debug!(path = %self.path.display(), key, "Preference written");
        Ok(())
    }
}
