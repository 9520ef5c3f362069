#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use linkbio::prelude::*;

/// Session backed by an in-memory preference store and deterministic ids.
pub fn create_test_session() -> BuilderSession {
    let store = Arc::new(MemoryPreferenceStore::new());
    create_session_with_store(store)
}

/// Session sharing `store`, so tests can simulate a restart by opening a
/// second session over the same store.
pub fn create_session_with_store(store: Arc<dyn PreferenceStore>) -> BuilderSession {
    BuilderSession::new(
        ThemeRegistry::new(store),
        Box::new(SequentialIdGenerator::new("link")),
    )
}

/// Session whose preferences live in `dir/preferences.json`.
pub fn create_file_backed_session(dir: &Path) -> BuilderSession {
    let store = Arc::new(FilePreferenceStore::new(dir.join("preferences.json")));
    create_session_with_store(store)
}

/// Adds one link per title, with URL `https://<title>.example.com`.
pub fn add_links(session: &mut BuilderSession, titles: &[&str]) -> Vec<Link> {
    titles
        .iter()
        .map(|title| {
            session
                .add_link(title, &format!("https://{}.example.com", title.to_lowercase()))
                .unwrap()
        })
        .collect()
}

pub fn titles(session: &BuilderSession) -> Vec<String> {
    session.links().iter().map(|l| l.title.clone()).collect()
}

pub fn assert_dense_order(session: &BuilderSession) {
    let orders: Vec<usize> = session.links().iter().map(|l| l.order).collect();
    let expected: Vec<usize> = (0..session.links().len()).collect();
    assert_eq!(orders, expected, "link order is not dense");
}
