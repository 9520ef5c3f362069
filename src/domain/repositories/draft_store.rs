//! Storage for the locally saved builder draft.

use crate::domain::entities::{BuilderSnapshot, Draft};
use crate::error::StoreError;

/// Persists one builder draft between process runs.
///
/// # Implementations
///
/// - [`crate::infrastructure::drafts::JsonDraftStore`] - Pretty-printed JSON file
#[cfg_attr(test, mockall::automock)]
pub trait DraftStore: Send + Sync {
    /// Loads the saved draft.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Draft))` if a draft was saved
    /// - `Ok(None)` if nothing has been saved yet
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O failure or a corrupt draft file.
    fn load(&self) -> Result<Option<Draft>, StoreError>;

    /// Saves `snapshot` as the current draft and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or serialization failure.
    fn save(&self, snapshot: &BuilderSnapshot) -> Result<Draft, StoreError>;

    /// Removes the saved draft. Succeeds if there was none.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O failure.
    fn clear(&self) -> Result<(), StoreError>;
}
