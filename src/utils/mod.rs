//! Pure helper functions used by the builder services.
//!
//! - [`link_validator`] - Link title/URL validation and URL sanitization
//! - [`link_renderer`] - Display host and icon classification for previews
//! - [`id_generator`] - Link id generation

pub mod id_generator;
pub mod link_renderer;
pub mod link_validator;

pub use id_generator::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use link_renderer::{classify_icon, display_url, render_link};
pub use link_validator::{LinkValidation, is_valid_url, sanitize_url, validate_link};
