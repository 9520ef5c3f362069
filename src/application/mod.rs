//! Application layer services implementing the builder's business rules.
//!
//! Services enforce link invariants, resolve themes and compose previews.
//! They consume the store traits from [`crate::domain::repositories`] and
//! are driven by UI collaborators such as the `linkbio` CLI.
//!
//! # Available Services
//!
//! - [`services::link_collection::LinkCollection`] - Ordered custom links
//! - [`services::theme_registry::ThemeRegistry`] - Theme lookup and selection
//! - [`services::preview_composer::PreviewComposer`] - Preview payloads
//! - [`services::builder_session::BuilderSession`] - The editing session aggregate

pub mod services;
