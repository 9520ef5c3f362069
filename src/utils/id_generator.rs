//! Link id generation.
//!
//! Ids only need to be unique within one link collection. The collection
//! checks every generated id against the ids it already holds.

use crate::error::BuilderError;
use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Source of fresh link ids, injected into the link collection.
pub trait IdGenerator: Send {
    /// Produces the next candidate id.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Internal`] if no id can be produced.
    fn next_id(&mut self) -> Result<String, BuilderError>;
}

/// Generates random 12-character URL-safe ids from OS entropy.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> Result<String, BuilderError> {
        let mut buffer = [0u8; ID_LENGTH_BYTES];

        getrandom::fill(&mut buffer).map_err(|e| {
            BuilderError::Internal(format!("Failed to generate random bytes: {e}"))
        })?;

        Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
    }
}

/// Deterministic `prefix-N` ids for tests.
///
/// The counter starts at 1 for every generator, so after a resume it can
/// reissue the id of a link removed before the save. [`LinkCollection`]
/// only guarantees ids are unique among the links currently held.
///
/// [`LinkCollection`]: crate::application::services::LinkCollection
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("link")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> Result<String, BuilderError> {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        Ok(id)
    }
}
