//! Local preference stores.
//!
//! Two implementations of [`PreferenceStore`](crate::domain::repositories::PreferenceStore):
//! - [`FilePreferenceStore`] - JSON object file, survives restarts
//! - [`MemoryPreferenceStore`] - In-process map for tests and ephemeral sessions

mod file_store;
mod memory_store;

pub use file_store::FilePreferenceStore;
pub use memory_store::MemoryPreferenceStore;
