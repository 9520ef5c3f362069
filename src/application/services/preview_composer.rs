//! Preview composition from links and the active theme.

use crate::application::services::builder_session::BuilderSession;
use crate::domain::entities::{Link, LinkPreview, PreviewMode, PreviewPayload};
use crate::utils::link_renderer::render_link;

/// Renders the active links in `order` sequence.
///
/// The output depends only on `links`: `theme_id` and `mode` are accepted so
/// callers can pass the full preview context, but layout is left to the
/// render layer. Inactive links are never included and the input is not
/// modified.
pub fn generate_preview(links: &[Link], _theme_id: &str, _mode: PreviewMode) -> Vec<LinkPreview> {
    let mut active: Vec<&Link> = links.iter().filter(|link| link.is_active).collect();
    active.sort_by_key(|link| link.order);

    active
        .into_iter()
        .map(|link| render_link(&link.title, &link.url))
        .collect()
}

/// Session-local preview UI state. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewState {
    pub mode: PreviewMode,
    pub visible: bool,
}

impl PreviewState {
    pub fn new(mode: PreviewMode) -> Self {
        Self {
            mode,
            visible: true,
        }
    }

    pub fn toggle_preview_mode(&mut self) -> PreviewMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn toggle_preview_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new(PreviewMode::default())
    }
}

/// Builds preview payloads from a builder session.
///
/// [`PreviewComposer::refresh`] lets a debounced caller poll after bursts of
/// mutations: each distinct session state is delivered once, and the last
/// delivery always matches the latest state.
#[derive(Debug, Default)]
pub struct PreviewComposer {
    last_delivered: Option<(u64, PreviewMode)>,
}

impl PreviewComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composes the preview for the session's current state.
    pub fn compose(&self, session: &BuilderSession) -> PreviewPayload {
        let theme = session.active_theme();
        let mode = session.preview_state().mode;

        PreviewPayload {
            revision: session.revision(),
            mode,
            theme: *theme,
            links: generate_preview(session.links(), theme.id, mode),
        }
    }

    /// Composes a preview only if the session changed since the last
    /// delivered payload.
    pub fn refresh(&mut self, session: &BuilderSession) -> Option<PreviewPayload> {
        let key = (session.revision(), session.preview_state().mode);
        if self.last_delivered == Some(key) {
            return None;
        }

        let payload = self.compose(session);
        self.last_delivered = Some(key);
        tracing::debug!(revision = key.0, mode = %key.1, links = payload.links.len(), "Preview refreshed");
        Some(payload)
    }
}
