//! Serializable snapshots of builder state.

use super::link::Link;
use super::profile::{Profile, SocialPlatform};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything a builder session persists, minus the dirty flag.
///
/// Two snapshots compare equal exactly when the sessions they were taken
/// from hold the same state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderSnapshot {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub social_links: BTreeMap<SocialPlatform, String>,
    #[serde(default)]
    pub links: Vec<Link>,
    pub selected_theme_id: String,
}

/// A snapshot as saved to the local draft store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub saved_at: DateTime<Utc>,
    pub snapshot: BuilderSnapshot,
}

impl Draft {
    pub fn new(snapshot: BuilderSnapshot) -> Self {
        Self {
            saved_at: Utc::now(),
            snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserializes_with_missing_sections() {
        let snapshot: BuilderSnapshot =
            serde_json::from_str(r#"{ "selected_theme_id": "dark" }"#).unwrap();

        assert_eq!(snapshot.selected_theme_id, "dark");
        assert!(snapshot.links.is_empty());
        assert!(snapshot.social_links.is_empty());
        assert_eq!(snapshot.profile, Profile::default());
    }

    #[test]
    fn test_social_links_serialize_as_platform_keys() {
        let mut snapshot = BuilderSnapshot {
            selected_theme_id: "default".to_string(),
            ..Default::default()
        };
        snapshot.social_links.insert(
            SocialPlatform::Github,
            "https://github.com/me".to_string(),
        );

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["social_links"]["github"], "https://github.com/me");

        let back: BuilderSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_draft_records_save_time() {
        let before = Utc::now();
        let draft = Draft::new(BuilderSnapshot::default());
        assert!(draft.saved_at >= before);
    }
}
