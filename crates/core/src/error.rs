//! Persistence-layer error model.

use thiserror::Error;

/// Result type used across the persistence layer.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Persistence-layer error.
///
/// Domain-level absence is **not** an error at this layer: `get` for a
/// missing id yields `Ok(None)` and `delete_by_id` yields `Ok(false)`.
/// This enum covers only infrastructure faults and contract violations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Delete-by-reference was attempted on an entity that was never saved.
    #[error("entity not persisted: {0}")]
    NotPersisted(String),

    /// Backing-store fault (lock poisoning, IO, connection loss).
    #[error("storage error: {0}")]
    Storage(String),
}

impl PersistenceError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_persisted(msg: impl Into<String>) -> Self {
        Self::NotPersisted(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
