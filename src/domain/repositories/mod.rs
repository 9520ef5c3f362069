//! Store trait definitions for the domain layer.
//!
//! The builder core performs no network I/O. Its only external resources are
//! the local stores defined here, implemented in `crate::infrastructure` and
//! injected at construction so tests can supply doubles.
//!
//! # Available Stores
//!
//! - [`PreferenceStore`] - Durable key-value preferences (selected theme)
//! - [`DraftStore`] - Locally saved builder draft
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod draft_store;
pub mod preference_store;

pub use draft_store::DraftStore;
pub use preference_store::{PreferenceStore, SELECTED_THEME_KEY};

#[cfg(test)]
pub use draft_store::MockDraftStore;
#[cfg(test)]
pub use preference_store::MockPreferenceStore;
