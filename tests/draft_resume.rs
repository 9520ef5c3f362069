mod common;

use std::sync::Arc;

use linkbio::prelude::*;

fn resume(store: &JsonDraftStore, preferences: Arc<dyn PreferenceStore>) -> BuilderSession {
    let draft = store.load().unwrap().expect("draft saved");
    BuilderSession::from_snapshot(
        ThemeRegistry::new(preferences),
        draft.snapshot,
        Box::new(SequentialIdGenerator::new("resumed")),
    )
    .unwrap()
}

#[test]
fn test_saved_draft_resumes_clean() {
    let dir = tempfile::tempdir().unwrap();
    let drafts = JsonDraftStore::new(dir.path().join("draft.json"));
    let preferences: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::new());

    let mut session = common::create_session_with_store(preferences.clone());
    session.set_display_name("Ada");
    session.set_bio("Analyst");
    session
        .set_social_link(SocialPlatform::Github, "github.com/ada")
        .unwrap();
    let links = common::add_links(&mut session, &["Blog", "Talks"]);
    session.toggle_link(&links[1].id);
    session.apply_theme("forest").unwrap();
    assert!(session.is_dirty());

    session.save_to(&drafts).unwrap();
    assert!(!session.is_dirty());

    let resumed = resume(&drafts, preferences);

    assert!(!resumed.is_dirty());
    assert_eq!(resumed.snapshot(), session.snapshot());
    assert_eq!(resumed.profile().display_name, "Ada");
    assert_eq!(resumed.active_theme().id, "forest");
    assert_eq!(resumed.link_collection().active_links().count(), 1);
}

#[test]
fn test_resumed_session_keeps_ids_unique() {
    let dir = tempfile::tempdir().unwrap();
    let drafts = JsonDraftStore::new(dir.path().join("draft.json"));
    let preferences: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::new());

    let mut session = common::create_session_with_store(preferences.clone());
    common::add_links(&mut session, &["A", "B"]);
    session.save_to(&drafts).unwrap();

    let mut resumed = resume(&drafts, preferences);
    let added = resumed.add_link("C", "https://c.example.com").unwrap();

    assert_eq!(added.order, 2);
    assert!(
        resumed
            .links()
            .iter()
            .filter(|l| l.id == added.id)
            .count()
            == 1
    );
    assert!(resumed.is_dirty());
}

#[test]
fn test_draft_with_duplicate_ids_is_rejected() {
    let snapshot = BuilderSnapshot {
        links: vec![
            Link::new("x".into(), "A".into(), "https://a.com".into(), 0),
            Link::new("x".into(), "B".into(), "https://b.com".into(), 1),
        ],
        selected_theme_id: "default".to_string(),
        ..Default::default()
    };

    let result = BuilderSession::from_snapshot(
        ThemeRegistry::new(Arc::new(MemoryPreferenceStore::new())),
        snapshot,
        Box::new(SequentialIdGenerator::default()),
    );

    assert!(matches!(result, Err(BuilderError::DuplicateLinkId(id)) if id == "x"));
}

#[test]
fn test_stale_draft_is_rewritten_on_open_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let drafts = JsonDraftStore::new(dir.path().join("draft.json"));
    let preferences: Arc<dyn PreferenceStore> =
        Arc::new(FilePreferenceStore::new(dir.path().join("preferences.json")));

    // Draft written before the theme was switched to ocean.
    drafts
        .save(&BuilderSnapshot {
            links: vec![Link::new("a".into(), "Blog".into(), "https://a.com".into(), 5)],
            selected_theme_id: "dark".to_string(),
            ..Default::default()
        })
        .unwrap();
    preferences.set("selected-theme", "ocean").unwrap();

    let open = || {
        BuilderSession::open(
            ThemeRegistry::new(preferences.clone()),
            &drafts,
            Box::new(SequentialIdGenerator::default()),
        )
        .unwrap()
    };

    let mut session = open();
    assert!(session.is_dirty());
    session.save_to(&drafts).unwrap();

    let stored = drafts.load().unwrap().unwrap().snapshot;
    assert_eq!(stored.selected_theme_id, "ocean");
    assert_eq!(stored.links[0].order, 0);

    assert!(!open().is_dirty());
}

#[test]
fn test_open_without_draft_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let drafts = JsonDraftStore::new(dir.path().join("draft.json"));

    let session = BuilderSession::open(
        ThemeRegistry::new(Arc::new(MemoryPreferenceStore::new())),
        &drafts,
        Box::new(SequentialIdGenerator::default()),
    )
    .unwrap();

    assert!(session.links().is_empty());
    assert!(!session.is_dirty());
}

#[test]
fn test_open_corrupt_draft_reports_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft.json");
    std::fs::write(&path, "{ \"saved_at\": ").unwrap();

    let result = BuilderSession::open(
        ThemeRegistry::new(Arc::new(MemoryPreferenceStore::new())),
        &JsonDraftStore::new(path),
        Box::new(SequentialIdGenerator::default()),
    );

    let err = result.unwrap_err();
    assert_eq!(err.code(), "store_error");
    assert_eq!(err.to_body().error.code, "store_error");
}
