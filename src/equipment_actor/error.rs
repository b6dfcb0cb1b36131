//! Error types for the Equipment actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EquipmentError {
    #[error("Equipment not found: {0}")]
    NotFound(String),

    #[error("Equipment validation error: {0}")]
    ValidationError(String),

    #[error("Share cleanup failed: {0}")]
    ShareCascade(String),

    #[error("Equipment storage error: {0}")]
    StorageError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::error::entity_error_conversions!(EquipmentError);
