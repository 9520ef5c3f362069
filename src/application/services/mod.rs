//! Business logic services for the application layer.

pub mod builder_session;
pub mod link_collection;
pub mod preview_composer;
pub mod theme_registry;

pub use builder_session::BuilderSession;
pub use link_collection::LinkCollection;
pub use preview_composer::{PreviewComposer, PreviewState, generate_preview};
pub use theme_registry::ThemeRegistry;
