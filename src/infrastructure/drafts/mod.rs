//! Local draft storage for builder sessions.

mod json_draft_store;

pub use json_draft_store::JsonDraftStore;
