//! Error types for gradplan
//!
//! Uses `thiserror` for library errors. Fatal conditions (catalog load) get
//! their own variants; recoverable conditions (corrupt share tokens) carry
//! enough context for the caller to report and fall back.

use thiserror::Error;

/// Result type alias for gradplan operations
pub type PlanResult<T> = Result<T, PlanError>;

/// Main error type for gradplan operations
#[derive(Error, Debug)]
pub enum PlanError {
    /// Course or program data could not be fetched or parsed.
    ///
    /// Fatal for the session: no validation, scaffolding, or share codec
    /// operation is possible without a loaded catalog.
    #[error("could not load catalog data: {reason}")]
    CatalogLoad { reason: String },

    /// A share token failed to decode.
    ///
    /// Recoverable: callers discard the token and fall back to persisted
    /// state or a fresh scaffold.
    #[error("share link is invalid or corrupted: {reason}")]
    CorruptShareToken { reason: String },

    /// A custom course reuses a code that already exists in the catalog
    #[error("a course with code '{code}' already exists")]
    DuplicateCustomCode { code: String },

    /// Share export requested before a program was selected
    #[error("no program selected - nothing to share")]
    NothingToShare,

    /// Persisted plan state could not be read or written
    #[error("could not access saved plan: {reason}")]
    Storage { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    /// Build a `CatalogLoad` from any displayable cause
    pub fn catalog_load(reason: impl std::fmt::Display) -> Self {
        PlanError::CatalogLoad {
            reason: reason.to_string(),
        }
    }

    /// Build a `CorruptShareToken` from any displayable cause
    pub fn corrupt_token(reason: impl std::fmt::Display) -> Self {
        PlanError::CorruptShareToken {
            reason: reason.to_string(),
        }
    }

    /// Build a `Storage` from any displayable cause
    pub fn storage(reason: impl std::fmt::Display) -> Self {
        PlanError::Storage {
            reason: reason.to_string(),
        }
    }
}
