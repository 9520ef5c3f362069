//! Infrastructure layer for local persistence.
//!
//! This layer implements the store traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`preferences`] - Preference stores (JSON file and in-memory)
//! - [`drafts`] - Builder draft storage (JSON file)

pub mod drafts;
pub mod preferences;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replaces `path` with `content` via a temp file in the same directory, so
/// readers see either the old file or the new one. Missing parent
/// directories are created.
pub(crate) fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path)?;
    Ok(())
}
