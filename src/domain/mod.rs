//! Domain layer containing the builder's entities and store contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation.
//! Business rules live in [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (links, themes, profile, previews)
//! - [`repositories`] - Store trait definitions implemented by infrastructure

pub mod entities;
pub mod repositories;
