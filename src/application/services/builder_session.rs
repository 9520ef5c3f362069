//! One user's in-progress editing state.

use std::collections::BTreeMap;

use crate::application::services::link_collection::LinkCollection;
use crate::application::services::preview_composer::PreviewState;
use crate::application::services::theme_registry::ThemeRegistry;
use crate::domain::entities::{
    BuilderSnapshot, Draft, Link, LinkPatch, PreviewMode, Profile, SocialPlatform, ThemeConfig,
};
use crate::domain::repositories::DraftStore;
use crate::error::{BuilderError, ValidationError};
use crate::utils::id_generator::IdGenerator;
use crate::utils::link_validator::{is_valid_url, sanitize_url};

/// Aggregate state of a builder session.
///
/// A session is owned by a single editor; every operation completes before
/// the next one observes state. Each change bumps [`revision`](Self::revision),
/// and [`is_dirty`](Self::is_dirty) compares the current state against the
/// last saved snapshot.
#[derive(Debug)]
pub struct BuilderSession {
    registry: ThemeRegistry,
    profile: Profile,
    social_links: BTreeMap<SocialPlatform, String>,
    links: LinkCollection,
    selected_theme_id: String,
    preview: PreviewState,
    revision: u64,
    saved: BuilderSnapshot,
}

impl BuilderSession {
    /// Starts an empty session, restoring the theme from the preference
    /// store.
    pub fn new(registry: ThemeRegistry, id_generator: Box<dyn IdGenerator>) -> Self {
        let selected_theme_id = registry.restore_selection().id.to_string();
        let mut session = Self {
            registry,
            profile: Profile::default(),
            social_links: BTreeMap::new(),
            links: LinkCollection::new(id_generator),
            selected_theme_id,
            preview: PreviewState::default(),
            revision: 0,
            saved: BuilderSnapshot::default(),
        };
        session.saved = session.snapshot();
        session
    }

    /// Resumes a session from a saved snapshot.
    ///
    /// The theme comes from the preference store, not the snapshot, so a
    /// selection made after the snapshot was written wins. Saved links are
    /// renumbered by their `order`. The snapshot as given stays the saved
    /// baseline, so the session is dirty if either adjustment changed it.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DuplicateLinkId`] or
    /// [`BuilderError::InvalidLink`] if the snapshot's links are corrupt.
    pub fn from_snapshot(
        registry: ThemeRegistry,
        snapshot: BuilderSnapshot,
        id_generator: Box<dyn IdGenerator>,
    ) -> Result<Self, BuilderError> {
        let links = LinkCollection::from_links(snapshot.links.clone(), id_generator)?;
        let selected_theme_id = registry.restore_selection().id.to_string();

        tracing::debug!(
            links = links.len(),
            theme_id = %selected_theme_id,
            "Builder session resumed"
        );

        Ok(Self {
            registry,
            profile: snapshot.profile.clone(),
            social_links: snapshot.social_links.clone(),
            links,
            selected_theme_id,
            preview: PreviewState::default(),
            revision: 0,
            saved: snapshot,
        })
    }

    /// Resumes the draft in `store`, or starts an empty session if there is
    /// none.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Store`] if the draft cannot be read, or any
    /// error from [`from_snapshot`](Self::from_snapshot).
    pub fn open(
        registry: ThemeRegistry,
        store: &dyn DraftStore,
        id_generator: Box<dyn IdGenerator>,
    ) -> Result<Self, BuilderError> {
        match store.load()? {
            Some(draft) => {
                tracing::info!(saved_at = %draft.saved_at, "Resuming saved draft");
                Self::from_snapshot(registry, draft.snapshot, id_generator)
            }
            None => Ok(Self::new(registry, id_generator)),
        }
    }

    /// Sets the initial preview mode.
    pub fn with_preview_mode(mut self, mode: PreviewMode) -> Self {
        self.preview.mode = mode;
        self
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ── Profile ────────────────────────────────────────────────────────────

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn set_display_name(&mut self, display_name: &str) {
        let display_name = display_name.trim();
        if self.profile.display_name != display_name {
            self.profile.display_name = display_name.to_string();
            self.touch();
        }
    }

    pub fn set_bio(&mut self, bio: &str) {
        let bio = bio.trim();
        if self.profile.bio != bio {
            self.profile.bio = bio.to_string();
            self.touch();
        }
    }

    /// Sets or clears the profile image reference. Blank references clear it.
    pub fn set_profile_image(&mut self, image: Option<&str>) {
        let image = image
            .map(str::trim)
            .filter(|image| !image.is_empty())
            .map(str::to_string);
        if self.profile.profile_image != image {
            self.profile.profile_image = image;
            self.touch();
        }
    }

    // ── Social links ───────────────────────────────────────────────────────

    pub fn social_links(&self) -> &BTreeMap<SocialPlatform, String> {
        &self.social_links
    }

    /// Sets the URL for a social platform.
    ///
    /// The URL is sanitized first, so `github.com/me` is stored as
    /// `https://github.com/me`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidLink`] if the URL is empty or invalid.
    pub fn set_social_link(&mut self, platform: SocialPlatform, url: &str) -> Result<(), BuilderError> {
        let url = sanitize_url(url);
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl.into());
        }
        if !is_valid_url(&url) {
            return Err(ValidationError::InvalidUrl.into());
        }

        if self.social_links.get(&platform) != Some(&url) {
            self.social_links.insert(platform, url);
            self.touch();
        }
        Ok(())
    }

    pub fn remove_social_link(&mut self, platform: SocialPlatform) -> bool {
        let removed = self.social_links.remove(&platform).is_some();
        if removed {
            self.touch();
        }
        removed
    }

    // ── Custom links ───────────────────────────────────────────────────────

    pub fn links(&self) -> &[Link] {
        self.links.links()
    }

    pub fn link_collection(&self) -> &LinkCollection {
        &self.links
    }

    /// See [`LinkCollection::add_link`].
    pub fn add_link(&mut self, title: &str, url: &str) -> Result<Link, BuilderError> {
        let link = self.links.add_link(title, url)?.clone();
        self.touch();
        Ok(link)
    }

    /// See [`LinkCollection::remove_link`].
    pub fn remove_link(&mut self, id: &str) -> bool {
        let removed = self.links.remove_link(id);
        if removed {
            self.touch();
        }
        removed
    }

    /// See [`LinkCollection::update_link`].
    pub fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<bool, BuilderError> {
        let updated = self.links.update_link(id, patch)?;
        if updated {
            self.touch();
        }
        Ok(updated)
    }

    /// See [`LinkCollection::reorder_links`].
    pub fn reorder_links(&mut self, from_index: usize, to_index: usize) -> Result<(), BuilderError> {
        self.links.reorder_links(from_index, to_index)?;
        if from_index != to_index {
            self.touch();
        }
        Ok(())
    }

    /// See [`LinkCollection::toggle_link`].
    pub fn toggle_link(&mut self, id: &str) -> Option<bool> {
        let toggled = self.links.toggle_link(id);
        if toggled.is_some() {
            self.touch();
        }
        toggled
    }

    // ── Theme ──────────────────────────────────────────────────────────────

    pub fn selected_theme_id(&self) -> &str {
        &self.selected_theme_id
    }

    /// The selected theme, or the default theme if the selection is unknown.
    pub fn active_theme(&self) -> &'static ThemeConfig {
        self.registry.resolve(&self.selected_theme_id)
    }

    /// Selects and persists a theme.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ThemeNotFound`] if `id` is not registered; the
    /// current selection is kept.
    pub fn apply_theme(&mut self, id: &str) -> Result<&'static ThemeConfig, BuilderError> {
        let theme = self.registry.apply_theme(id)?;
        if self.selected_theme_id != theme.id {
            self.selected_theme_id = theme.id.to_string();
            self.touch();
        }
        Ok(theme)
    }

    // ── Preview ────────────────────────────────────────────────────────────

    pub fn preview_state(&self) -> PreviewState {
        self.preview
    }

    pub fn toggle_preview_mode(&mut self) -> PreviewMode {
        self.preview.toggle_preview_mode()
    }

    pub fn toggle_preview_visibility(&mut self) -> bool {
        self.preview.toggle_preview_visibility()
    }

    // ── Persistence ────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> BuilderSnapshot {
        BuilderSnapshot {
            profile: self.profile.clone(),
            social_links: self.social_links.clone(),
            links: self.links.links().to_vec(),
            selected_theme_id: self.selected_theme_id.clone(),
        }
    }

    /// True when any field differs from the last saved snapshot.
    pub fn is_dirty(&self) -> bool {
        self.snapshot() != self.saved
    }

    /// Records the current state as committed. Call only after a save
    /// succeeded.
    pub fn mark_saved(&mut self) {
        self.saved = self.snapshot();
    }

    /// Saves the current state to `store` and marks it committed.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Store`] if the save fails; the session stays
    /// dirty.
    pub fn save_to(&mut self, store: &dyn DraftStore) -> Result<Draft, BuilderError> {
        let snapshot = self.snapshot();
        let draft = store.save(&snapshot)?;
        self.saved = snapshot;
        tracing::debug!(revision = self.revision, "Builder session saved");
        Ok(draft)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockDraftStore;
    use crate::error::StoreError;
    use crate::infrastructure::preferences::MemoryPreferenceStore;
    use crate::utils::id_generator::SequentialIdGenerator;
    use std::sync::Arc;

    fn session() -> BuilderSession {
        let registry = ThemeRegistry::new(Arc::new(MemoryPreferenceStore::new()));
        BuilderSession::new(registry, Box::new(SequentialIdGenerator::new("t")))
    }

    #[test]
    fn test_new_session_is_clean() {
        let session = session();
        assert!(!session.is_dirty());
        assert_eq!(session.revision(), 0);
        assert_eq!(session.selected_theme_id(), "default");
        assert!(session.links().is_empty());
    }

    #[test]
    fn test_new_session_restores_stored_theme() {
        let store = Arc::new(MemoryPreferenceStore::new());
        ThemeRegistry::new(store.clone()).apply_theme("ocean").unwrap();

        let session = BuilderSession::new(
            ThemeRegistry::new(store),
            Box::new(SequentialIdGenerator::default()),
        );

        assert_eq!(session.active_theme().id, "ocean");
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_mutations_mark_dirty_and_bump_revision() {
        let mut session = session();

        session.set_display_name("  Ada  ");
        assert_eq!(session.profile().display_name, "Ada");
        assert!(session.is_dirty());
        assert_eq!(session.revision(), 1);

        session.add_link("Blog", "https://ada.dev").unwrap();
        assert_eq!(session.revision(), 2);
    }

    #[test]
    fn test_noop_mutations_keep_revision() {
        let mut session = session();
        session.set_bio("");
        session.remove_link("missing");
        session.toggle_link("missing");
        session.remove_social_link(SocialPlatform::Github);

        assert_eq!(session.revision(), 0);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_reverting_a_change_clears_dirty() {
        let mut session = session();
        session.set_bio("hello");
        assert!(session.is_dirty());

        session.set_bio("");
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_mark_saved_clears_dirty() {
        let mut session = session();
        session.add_link("Blog", "https://ada.dev").unwrap();

        session.mark_saved();
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_profile_image_blank_clears() {
        let mut session = session();
        session.set_profile_image(Some("uploads/ada.png"));
        assert_eq!(session.profile().profile_image.as_deref(), Some("uploads/ada.png"));

        session.set_profile_image(Some("   "));
        assert!(session.profile().profile_image.is_none());
    }

    #[test]
    fn test_set_social_link_sanitizes() {
        let mut session = session();
        session
            .set_social_link(SocialPlatform::Github, "github.com/ada")
            .unwrap();

        assert_eq!(
            session.social_links().get(&SocialPlatform::Github).map(String::as_str),
            Some("https://github.com/ada")
        );
    }

    #[test]
    fn test_set_social_link_rejects_empty() {
        let mut session = session();
        let err = session
            .set_social_link(SocialPlatform::Twitter, "  ")
            .unwrap_err();

        assert!(matches!(err, BuilderError::InvalidLink(ValidationError::EmptyUrl)));
        assert!(session.social_links().is_empty());
    }

    #[test]
    fn test_apply_unknown_theme_keeps_selection() {
        let mut session = session();
        session.apply_theme("dark").unwrap();

        let err = session.apply_theme("nonexistent-id").unwrap_err();
        assert!(matches!(err, BuilderError::ThemeNotFound(_)));
        assert_eq!(session.selected_theme_id(), "dark");
    }

    #[test]
    fn test_preview_toggles_do_not_dirty() {
        let mut session = session().with_preview_mode(PreviewMode::Mobile);
        assert_eq!(session.preview_state().mode, PreviewMode::Mobile);

        assert_eq!(session.toggle_preview_mode(), PreviewMode::Desktop);
        assert!(!session.toggle_preview_visibility());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_save_to_marks_saved() {
        let mut store = MockDraftStore::new();
        store
            .expect_save()
            .withf(|snapshot| snapshot.links.len() == 1)
            .times(1)
            .returning(|snapshot| Ok(Draft::new(snapshot.clone())));

        let mut session = session();
        session.add_link("Blog", "https://ada.dev").unwrap();

        let draft = session.save_to(&store).unwrap();
        assert_eq!(draft.snapshot.links[0].title, "Blog");
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_failed_save_stays_dirty() {
        let mut store = MockDraftStore::new();
        store
            .expect_save()
            .returning(|_| Err(StoreError::Io(std::io::Error::other("read-only"))));

        let mut session = session();
        session.set_display_name("Ada");

        assert!(matches!(session.save_to(&store), Err(BuilderError::Store(_))));
        assert!(session.is_dirty());
    }

    #[test]
    fn test_from_snapshot_round_trip() {
        let mut original = session();
        original.set_display_name("Ada");
        original.add_link("Blog", "https://ada.dev").unwrap();
        original.add_link("Code", "https://github.com/ada").unwrap();
        let snapshot = original.snapshot();

        let registry = ThemeRegistry::new(Arc::new(MemoryPreferenceStore::new()));
        let resumed = BuilderSession::from_snapshot(
            registry,
            snapshot.clone(),
            Box::new(SequentialIdGenerator::new("t")),
        )
        .unwrap();

        assert_eq!(resumed.snapshot(), snapshot);
        assert!(!resumed.is_dirty());
    }

    #[test]
    fn test_from_snapshot_with_newer_theme_is_dirty() {
        let store = Arc::new(MemoryPreferenceStore::new());
        ThemeRegistry::new(store.clone()).apply_theme("ocean").unwrap();

        let snapshot = BuilderSnapshot {
            selected_theme_id: "dark".to_string(),
            ..Default::default()
        };
        let resumed = BuilderSession::from_snapshot(
            ThemeRegistry::new(store),
            snapshot.clone(),
            Box::new(SequentialIdGenerator::new("t")),
        )
        .unwrap();

        assert_eq!(resumed.selected_theme_id(), "ocean");
        assert_ne!(resumed.snapshot(), snapshot);
        assert!(resumed.is_dirty());
    }

    #[test]
    fn test_from_snapshot_with_gapped_order_is_dirty() {
        let snapshot = BuilderSnapshot {
            links: vec![Link::new(
                "a".to_string(),
                "Blog".to_string(),
                "https://ada.dev".to_string(),
                5,
            )],
            selected_theme_id: "default".to_string(),
            ..Default::default()
        };

        let resumed = BuilderSession::from_snapshot(
            ThemeRegistry::new(Arc::new(MemoryPreferenceStore::new())),
            snapshot,
            Box::new(SequentialIdGenerator::new("t")),
        )
        .unwrap();

        assert_eq!(resumed.links()[0].order, 0);
        assert!(resumed.is_dirty());
    }

    #[test]
    fn test_update_with_same_values_keeps_revision() {
        let mut session = session();
        let link = session.add_link("A", "https://a.com").unwrap();
        let revision = session.revision();

        assert!(!session.update_link(&link.id, LinkPatch::title("A")).unwrap());

        assert_eq!(session.revision(), revision);
    }

    #[test]
    fn test_open_without_draft_starts_empty() {
        let mut store = MockDraftStore::new();
        store.expect_load().times(1).returning(|| Ok(None));

        let session = BuilderSession::open(
            ThemeRegistry::new(Arc::new(MemoryPreferenceStore::new())),
            &store,
            Box::new(SequentialIdGenerator::new("t")),
        )
        .unwrap();

        assert!(session.links().is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_open_propagates_read_failure() {
        let mut store = MockDraftStore::new();
        store
            .expect_load()
            .returning(|| Err(StoreError::Io(std::io::Error::other("permission denied"))));

        let result = BuilderSession::open(
            ThemeRegistry::new(Arc::new(MemoryPreferenceStore::new())),
            &store,
            Box::new(SequentialIdGenerator::new("t")),
        );

        assert!(matches!(result, Err(BuilderError::Store(_))));
    }
}
