//! # linkbio
//!
//! Builder state and preview engine for personal link-in-bio pages.
//!
//! A builder session holds a profile header, social links, an ordered list of
//! custom links and a selected theme. The engine keeps the links valid and
//! densely ordered, resolves themes against a fixed registry, and composes a
//! preview of the active links on demand.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and store traits
//! - **Application Layer** ([`application`]) - Link collection, theme registry,
//!   preview composer and the builder session aggregate
//! - **Infrastructure Layer** ([`infrastructure`]) - File-backed and in-memory stores
//! - **Utilities** ([`utils`]) - Link validation, rendering and id generation
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use linkbio::prelude::*;
//!
//! let registry = ThemeRegistry::new(Arc::new(MemoryPreferenceStore::new()));
//! let mut session = BuilderSession::new(registry, Box::new(RandomIdGenerator));
//!
//! session.add_link("Blog", "https://example.com")?;
//! session.apply_theme("dark")?;
//!
//! let preview = PreviewComposer::new().compose(&session);
//! assert_eq!(preview.links.len(), 1);
//! ```
//!
//! ## Configuration
//!
//! The `linkbio` binary loads its configuration from environment variables
//! via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::{BuilderError, ValidationError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        BuilderSession, LinkCollection, PreviewComposer, PreviewState, ThemeRegistry,
        generate_preview,
    };
    pub use crate::domain::entities::{
        BuilderSnapshot, Draft, IconKind, Link, LinkPatch, LinkPreview, PreviewMode,
        PreviewPayload, Profile, SocialPlatform, ThemeConfig,
    };
    pub use crate::domain::repositories::{DraftStore, PreferenceStore};
    pub use crate::error::{BuilderError, StoreError, ValidationError};
    pub use crate::infrastructure::drafts::JsonDraftStore;
    pub use crate::infrastructure::preferences::{FilePreferenceStore, MemoryPreferenceStore};
    pub use crate::utils::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
}
