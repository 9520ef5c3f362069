//! Key-value store for durable local preferences.

use crate::error::StoreError;

/// Key under which the selected theme id is persisted.
pub const SELECTED_THEME_KEY: &str = "selected-theme";

/// Durable string key-value store owned by a single builder session.
///
/// Read once when a session starts and written whenever the user applies a
/// theme. A single session is the only writer, so implementations need no
/// cross-process locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::preferences::FilePreferenceStore`] - JSON file on disk
/// - [`crate::infrastructure::preferences::MemoryPreferenceStore`] - In-memory, for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored value for `key`, or `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
