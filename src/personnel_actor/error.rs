//! Error types for the Personnel actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersonnelError {
    #[error("Personnel not found: {0}")]
    NotFound(String),

    #[error("Personnel validation error: {0}")]
    ValidationError(String),

    /// Removing the person's shares failed, so the person was kept.
    #[error("Share cleanup failed: {0}")]
    ShareCascade(String),

    #[error("Personnel storage error: {0}")]
    StorageError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::error::entity_error_conversions!(PersonnelError);
