//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before a builder
//! session is opened.
//!
//! ```bash
//! export LINKBIO_DATA_DIR="$HOME/.local/share/linkbio"
//! export LINKBIO_DEFAULT_THEME="dark"
//! ```
//!
//! ## Optional Variables
//!
//! - `LINKBIO_DATA_DIR` - Directory for `preferences.json` and `draft.json`
//!   (default: `.linkbio`)
//! - `LINKBIO_DEFAULT_THEME` - Fallback theme id (default: `default`)
//! - `LINKBIO_PREVIEW_MODE` - Initial preview mode, `desktop` or `mobile`
//!   (default: `desktop`)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Result, anyhow};
use std::env;
use std::path::PathBuf;

use crate::domain::entities::{BUILTIN_THEMES, DEFAULT_THEME_ID, PreviewMode};

const PREFERENCES_FILE: &str = "preferences.json";
const DRAFT_FILE: &str = "draft.json";

/// Builder configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub default_theme: String,
    pub preview_mode: PreviewMode,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LINKBIO_PREVIEW_MODE` is not a known mode.
    pub fn from_env() -> Result<Self> {
        let data_dir = env::var("LINKBIO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".linkbio"));

        let default_theme =
            env::var("LINKBIO_DEFAULT_THEME").unwrap_or_else(|_| DEFAULT_THEME_ID.to_string());

        let preview_mode = match env::var("LINKBIO_PREVIEW_MODE") {
            Ok(value) => value
                .parse::<PreviewMode>()
                .map_err(|e: String| anyhow!("LINKBIO_PREVIEW_MODE: {e}"))?,
            Err(_) => PreviewMode::default(),
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            data_dir,
            default_theme,
            preview_mode,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `data_dir` is empty
    /// - `default_theme` is not a built-in theme
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            anyhow::bail!("LINKBIO_DATA_DIR must not be empty");
        }

        if !BUILTIN_THEMES.iter().any(|t| t.id == self.default_theme) {
            let known: Vec<_> = BUILTIN_THEMES.iter().map(|t| t.id).collect();
            anyhow::bail!(
                "LINKBIO_DEFAULT_THEME must be one of [{}], got '{}'",
                known.join(", "),
                self.default_theme
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }

    pub fn draft_path(&self) -> PathBuf {
        self.data_dir.join(DRAFT_FILE)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data directory: {}", self.data_dir.display());
        tracing::info!("  Default theme: {}", self.default_theme);
        tracing::info!("  Preview mode: {}", self.preview_mode);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
