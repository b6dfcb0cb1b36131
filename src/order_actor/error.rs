//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProcessOrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The order entered production but its tracking row could not be ensured.
    #[error("Tracking creation failed: {0}")]
    TrackingFailed(String),

    #[error("Order storage error: {0}")]
    StorageError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::error::entity_error_conversions!(ProcessOrderError);
