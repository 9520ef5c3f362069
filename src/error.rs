//! Error types shared across the builder engine.
//!
//! Every failure is returned as a value. Validation problems are recoverable
//! by correcting the input, [`BuilderError::IndexOutOfRange`] signals a caller
//! contract violation, and [`BuilderError::ThemeNotFound`] is expected to be
//! resolved by falling back to the default theme.

use serde::Serialize;
use serde_json::{Value, json};

/// Reasons a link's title or URL is rejected.
///
/// Checks run in declaration order and only the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("Invalid URL format")]
    InvalidUrl,
}

impl ValidationError {
    /// Stable machine-readable identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "empty_title",
            Self::EmptyUrl => "empty_url",
            Self::InvalidUrl => "invalid_url",
        }
    }
}

/// Errors raised by local key-value and draft stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors returned by builder session operations.
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    #[error("Invalid link: {0}")]
    InvalidLink(#[from] ValidationError),

    #[error("Index {index} is out of range for {len} links")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Theme not found: {0}")]
    ThemeNotFound(String),

    #[error("Duplicate link id: {0}")]
    DuplicateLinkId(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

impl BuilderError {
    /// Stable machine-readable identifier for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLink(reason) => reason.code(),
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::ThemeNotFound(_) => "theme_not_found",
            Self::DuplicateLinkId(_) => "duplicate_link_id",
            Self::Store(_) => "store_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Structured context for the error, suitable for JSON output.
    pub fn details(&self) -> Value {
        match self {
            Self::InvalidLink(_) | Self::Store(_) | Self::Internal(_) => json!({}),
            Self::IndexOutOfRange { index, len } => json!({ "index": index, "len": len }),
            Self::ThemeNotFound(id) => json!({ "theme_id": id }),
            Self::DuplicateLinkId(id) => json!({ "link_id": id }),
        }
    }

    /// Returns true for errors the user can fix by correcting input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidLink(_) | Self::ThemeNotFound(_))
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message: self.to_string(),
                details: self.details(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_codes() {
        assert_eq!(ValidationError::EmptyTitle.code(), "empty_title");
        assert_eq!(ValidationError::EmptyUrl.code(), "empty_url");
        assert_eq!(ValidationError::InvalidUrl.code(), "invalid_url");
    }

    #[test]
    fn test_invalid_link_uses_reason_code() {
        let err = BuilderError::from(ValidationError::EmptyUrl);
        assert_eq!(err.code(), "empty_url");
        assert!(err.to_string().contains("URL cannot be empty"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_index_out_of_range_details() {
        let err = BuilderError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.code(), "index_out_of_range");
        assert_eq!(err.details(), json!({ "index": 5, "len": 3 }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_body_serialization() {
        let err = BuilderError::ThemeNotFound("neon".to_string());
        let body = serde_json::to_value(err.to_body()).unwrap();

        assert_eq!(body["error"]["code"], "theme_not_found");
        assert_eq!(body["error"]["message"], "Theme not found: neon");
        assert_eq!(body["error"]["details"]["theme_id"], "neon");
    }

    #[test]
    fn test_store_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BuilderError::from(StoreError::from(io));
        assert_eq!(err.code(), "store_error");
        assert!(err.to_string().starts_with("Store I/O error"));
    }
}
