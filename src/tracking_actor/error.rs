use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProcessTrackingError {
    #[error("Tracking row not found: {0}")]
    NotFound(String),

    #[error("Tracking validation error: {0}")]
    ValidationError(String),

    #[error("Tracking storage error: {0}")]
    StorageError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::error::entity_error_conversions!(ProcessTrackingError);
