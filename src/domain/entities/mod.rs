//! Core domain entities representing the builder's data model.
//!
//! Entities are plain data structures. Invariants that span several links
//! (ordering, id uniqueness) are enforced by
//! [`LinkCollection`](crate::application::services::LinkCollection), not here.
//!
//! # Entity Types
//!
//! - [`Link`] - A custom link, with [`LinkPatch`] for partial updates
//! - [`Profile`] and [`SocialPlatform`] - Page header and social links
//! - [`ThemeConfig`] - A built-in visual theme
//! - [`LinkPreview`] and [`PreviewPayload`] - Derived preview data
//! - [`BuilderSnapshot`] and [`Draft`] - Persisted session state

pub mod link;
pub mod preview;
pub mod profile;
pub mod snapshot;
pub mod theme;

pub use link::{Link, LinkPatch};
pub use preview::{IconKind, LinkPreview, PreviewMode, PreviewPayload};
pub use profile::{Profile, SocialPlatform};
pub use snapshot::{BuilderSnapshot, Draft};
pub use theme::{BUILTIN_THEMES, ColorSet, DEFAULT_THEME_ID, ThemeConfig, ThemeFonts, ThemeSpacing};
