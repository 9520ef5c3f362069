//! Ordered collection of custom links.

use std::collections::HashSet;
use std::fmt;

use crate::domain::entities::{Link, LinkPatch};
use crate::error::BuilderError;
use crate::utils::id_generator::IdGenerator;
use crate::utils::link_validator::validate_link;

/// Attempts at finding an unused id before giving up.
const MAX_ID_ATTEMPTS: usize = 10;

/// Owns the ordered links of one builder session.
///
/// # Invariants
///
/// - Link ids are unique within the collection
/// - `order` of every link equals its index, so orders are exactly `0..len`
/// - Titles and URLs are stored trimmed and always pass validation
///
/// Input is validated on insert and update; invalid input is rejected with
/// [`BuilderError::InvalidLink`] and never stored.
pub struct LinkCollection {
    links: Vec<Link>,
    id_generator: Box<dyn IdGenerator>,
}

impl fmt::Debug for LinkCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkCollection")
            .field("links", &self.links)
            .finish_non_exhaustive()
    }
}

impl LinkCollection {
    /// Creates an empty collection.
    pub fn new(id_generator: Box<dyn IdGenerator>) -> Self {
        Self {
            links: Vec::new(),
            id_generator,
        }
    }

    /// Rebuilds a collection from previously saved links.
    ///
    /// Links are sorted by their saved `order`, re-trimmed and renumbered.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::DuplicateLinkId`] if two links share an id and
    /// [`BuilderError::InvalidLink`] if a saved link no longer validates.
    pub fn from_links(
        mut links: Vec<Link>,
        id_generator: Box<dyn IdGenerator>,
    ) -> Result<Self, BuilderError> {
        let mut seen = HashSet::new();
        for link in &mut links {
            if !seen.insert(link.id.clone()) {
                return Err(BuilderError::DuplicateLinkId(link.id.clone()));
            }
            validate_link(&link.title, &link.url)?;
            link.title = link.title.trim().to_string();
            link.url = link.url.trim().to_string();
        }

        links.sort_by_key(|link| link.order);

        let mut collection = Self {
            links,
            id_generator,
        };
        collection.reindex();
        Ok(collection)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn get(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.id == id)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates over active links in order.
    pub fn active_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|link| link.is_active)
    }

    /// Appends a new active link.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidLink`] if the title or URL fails
    /// validation, and [`BuilderError::Internal`] if no unused id could be
    /// generated. Nothing is inserted on error.
    pub fn add_link(&mut self, title: &str, url: &str) -> Result<&Link, BuilderError> {
        validate_link(title, url)?;

        let id = self.generate_unique_id()?;
        let index = self.links.len();
        self.links.push(Link::new(
            id,
            title.trim().to_string(),
            url.trim().to_string(),
            index,
        ));

        let link = &self.links[index];
        tracing::debug!(link_id = %link.id, order = index, "Link added");
        Ok(link)
    }

    /// Removes the link with `id`.
    ///
    /// Returns `false` and leaves the collection untouched if no link
    /// matches.
    pub fn remove_link(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.links.remove(index);
        self.reindex();
        tracing::debug!(link_id = %id, "Link removed");
        true
    }

    /// Merges `patch` into the link with `id`.
    ///
    /// The merged title and URL are trimmed and validated before anything
    /// is written. Returns `Ok(true)` only if a field changed; `Ok(false)` if
    /// no link matches or the patch leaves the link as it was.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidLink`] if the merged link would be
    /// invalid; the link is left unchanged.
    pub fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<bool, BuilderError> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };

        let link = &mut self.links[index];
        let title = patch.title.as_deref().unwrap_or(&link.title).trim().to_string();
        let url = patch.url.as_deref().unwrap_or(&link.url).trim().to_string();
        validate_link(&title, &url)?;

        let is_active = patch.is_active.unwrap_or(link.is_active);
        if link.title == title && link.url == url && link.is_active == is_active {
            return Ok(false);
        }

        link.title = title;
        link.url = url;
        link.is_active = is_active;

        tracing::debug!(link_id = %id, "Link updated");
        Ok(true)
    }

    /// Moves the link at `from_index` so that it ends up at `to_index`.
    ///
    /// The element is removed first and then inserted at `to_index` of the
    /// remaining sequence; this is a move, not a swap.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::IndexOutOfRange`] if either index is not in
    /// `0..len`.
    pub fn reorder_links(&mut self, from_index: usize, to_index: usize) -> Result<(), BuilderError> {
        let len = self.links.len();
        for index in [from_index, to_index] {
            if index >= len {
                return Err(BuilderError::IndexOutOfRange { index, len });
            }
        }

        if from_index == to_index {
            return Ok(());
        }

        let link = self.links.remove(from_index);
        self.links.insert(to_index, link);
        self.reindex();

        tracing::debug!(from = from_index, to = to_index, "Links reordered");
        Ok(())
    }

    /// Flips `is_active` on the link with `id` and returns the new value.
    ///
    /// Returns `None` if no link matches.
    pub fn toggle_link(&mut self, id: &str) -> Option<bool> {
        let link = self.links.iter_mut().find(|link| link.id == id)?;
        link.is_active = !link.is_active;
        tracing::debug!(link_id = %id, is_active = link.is_active, "Link toggled");
        Some(link.is_active)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.links.iter().position(|link| link.id == id)
    }

    fn reindex(&mut self) {
        for (index, link) in self.links.iter_mut().enumerate() {
            link.order = index;
        }
    }

    fn generate_unique_id(&mut self) -> Result<String, BuilderError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.id_generator.next_id()?;
            if self.get(&id).is_none() {
                return Ok(id);
            }
            tracing::warn!(link_id = %id, "Generated link id collided, retrying");
        }

        Err(BuilderError::Internal(
            "Failed to generate unique link id: too many collisions".to_string(),
        ))
    }
}
