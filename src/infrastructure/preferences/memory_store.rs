//! In-memory preference store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::repositories::PreferenceStore;
use crate::error::StoreError;

/// A preference store that lives only as long as the process.
///
/// # Use Cases
///
/// - Tests that need a real store without touching disk
/// - Sessions started with persistence disabled
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
