//! Draft store backed by a pretty-printed JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::entities::{BuilderSnapshot, Draft};
use crate::domain::repositories::DraftStore;
use crate::error::StoreError;
use crate::infrastructure::write_atomic;

/// Saves the builder draft to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonDraftStore {
    path: PathBuf,
}

impl JsonDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStore for JsonDraftStore {
    fn load(&self) -> Result<Option<Draft>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No saved draft");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let draft: Draft = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            saved_at = %draft.saved_at,
            links = draft.snapshot.links.len(),
            "Draft loaded"
        );
        Ok(Some(draft))
    }

    fn save(&self, snapshot: &BuilderSnapshot) -> Result<Draft, StoreError> {
        let draft = Draft::new(snapshot.clone());
        let content = serde_json::to_string_pretty(&draft)?;
        write_atomic(&self.path, &content)?;

        tracing::debug!(path = %self.path.display(), "Draft saved");
        Ok(draft)
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
