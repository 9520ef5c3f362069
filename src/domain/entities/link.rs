//! Link entity representing one custom destination on the bio page.

use serde::{Deserialize, Serialize};

/// A user-added link with its position in the collection.
///
/// `order` always equals the link's index in the owning
/// [`LinkCollection`](crate::application::services::LinkCollection); it is
/// recomputed by the collection and cannot be set through [`LinkPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    pub order: usize,
    pub is_active: bool,
}

impl Link {
    /// Creates a new active link.
    pub fn new(id: String, title: String, url: String, order: usize) -> Self {
        Self {
            id,
            title,
            url,
            order,
            is_active: true,
        }
    }
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub is_active: Option<bool>,
}

impl LinkPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.is_active.is_none()
    }
}
