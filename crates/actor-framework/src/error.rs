//! # Framework Errors
//!
//! Error types shared by every actor and client. Entity-specific failures travel
//! boxed inside [`FrameworkError::EntityError`] and are recovered with
//! [`FrameworkError::downcast_entity`].

/// Failures of the backing store behind an actor.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage encoding failed: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl FrameworkError {
    /// Recovers the concrete entity error carried by `EntityError`.
    ///
    /// Returns `Err(self)` unchanged when this is not an entity error, or when the
    /// boxed error is of a different type.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
