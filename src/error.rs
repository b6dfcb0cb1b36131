//! Shared error plumbing for the per-actor error enums.
//!
//! Every actor error carries `NotFound`, `StorageError` and `ActorCommunicationError`
//! variants. [`entity_error_conversions!`] wires those to [`FrameworkError`] so clients can
//! use `?`/`.into()` and still get the entity's own error back when the actor produced one.
//!
//! [`FrameworkError`]: actor_framework::FrameworkError

macro_rules! entity_error_conversions {
    ($error:ident) => {
        impl From<String> for $error {
            fn from(msg: String) -> Self {
                $error::ActorCommunicationError(msg)
            }
        }

        impl From<actor_framework::FrameworkError> for $error {
            fn from(e: actor_framework::FrameworkError) -> Self {
                use actor_framework::FrameworkError;
                match e.downcast_entity::<$error>() {
                    Ok(entity) => entity,
                    Err(FrameworkError::NotFound(id)) => $error::NotFound(id),
                    Err(FrameworkError::Storage(e)) => $error::StorageError(e.to_string()),
                    Err(other) => $error::ActorCommunicationError(other.to_string()),
                }
            }
        }
    };
}

pub(crate) use entity_error_conversions;
