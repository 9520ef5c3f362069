//! Theme lookup and persisted theme selection.

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::{BUILTIN_THEMES, ThemeConfig};
use crate::domain::repositories::{PreferenceStore, SELECTED_THEME_KEY};
use crate::error::BuilderError;

/// Resolves theme ids and persists the user's selection.
///
/// The theme list is read-only reference data. The selection is stored in
/// the injected [`PreferenceStore`] under [`SELECTED_THEME_KEY`].
///
/// Store failures never abort an operation: a failed read is treated as "no
/// selection" and a failed write is logged.
#[derive(Clone)]
pub struct ThemeRegistry {
    themes: &'static [ThemeConfig],
    default_theme: &'static ThemeConfig,
    store: Arc<dyn PreferenceStore>,
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("themes", &self.themes.len())
            .field("default_theme", &self.default_theme.id)
            .finish_non_exhaustive()
    }
}

impl ThemeRegistry {
    /// Creates a registry over the built-in themes.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            themes: &BUILTIN_THEMES,
            default_theme: &BUILTIN_THEMES[0],
            store,
        }
    }

    /// Replaces the fallback theme.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ThemeNotFound`] if `id` is not registered.
    pub fn with_default_theme(mut self, id: &str) -> Result<Self, BuilderError> {
        self.default_theme = self
            .get_theme(id)
            .ok_or_else(|| BuilderError::ThemeNotFound(id.to_string()))?;
        Ok(self)
    }

    /// All themes in presentation order.
    pub fn available_themes(&self) -> &'static [ThemeConfig] {
        self.themes
    }

    /// Looks up a theme by id. An unknown id is a normal `None` outcome.
    pub fn get_theme(&self, id: &str) -> Option<&'static ThemeConfig> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    pub fn default_theme(&self) -> &'static ThemeConfig {
        self.default_theme
    }

    /// Looks up a theme, falling back to the default theme.
    pub fn resolve(&self, id: &str) -> &'static ThemeConfig {
        self.get_theme(id).unwrap_or_else(|| {
            tracing::warn!(
                theme_id = %id,
                fallback = %self.default_theme.id,
                "Theme not found, using default"
            );
            self.default_theme
        })
    }

    /// Persists `id` as the selected theme.
    ///
    /// Unknown ids are rejected and nothing is written. A failed write is
    /// logged and the theme is still returned, so the selection holds for
    /// the rest of the session.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ThemeNotFound`] if `id` is not registered.
    pub fn apply_theme(&self, id: &str) -> Result<&'static ThemeConfig, BuilderError> {
        let theme = self
            .get_theme(id)
            .ok_or_else(|| BuilderError::ThemeNotFound(id.to_string()))?;

        if let Err(e) = self.store.set(SELECTED_THEME_KEY, theme.id) {
            tracing::warn!(theme_id = %theme.id, error = %e, "Failed to persist theme selection");
        } else {
            tracing::debug!(theme_id = %theme.id, "Theme selection persisted");
        }

        Ok(theme)
    }

    /// Reads the persisted selection.
    ///
    /// Returns the default theme if nothing is stored, the stored id is no
    /// longer registered, or the store cannot be read.
    pub fn restore_selection(&self) -> &'static ThemeConfig {
        let stored = match self.store.get(SELECTED_THEME_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read theme selection");
                None
            }
        };

        match stored {
            Some(id) => self.resolve(&id),
            None => self.default_theme,
        }
    }
}
