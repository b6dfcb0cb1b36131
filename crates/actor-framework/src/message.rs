//! # Generic Messages
//!
//! The message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Predicate evaluated inside the actor against stored entities.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Outcome of a find-or-create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ensured<Id> {
    /// A matching entity was already stored.
    Existing(Id),
    /// No match existed, so one was created.
    Created(Id),
}

impl<Id> Ensured<Id> {
    pub fn id(&self) -> &Id {
        match self {
            Ensured::Existing(id) | Ensured::Created(id) => id,
        }
    }

    pub fn into_id(self) -> Id {
        match self {
            Ensured::Existing(id) | Ensured::Created(id) => id,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Ensured::Created(_))
    }
}

/// Internal message type sent to the actor to request operations.
///
/// The CRUD core (`Create`, `Get`, `Update`, `Delete`) plus `Action` for
/// resource-specific logic. The remaining variants are collection operations that
/// must happen atomically inside the actor:
///
/// - **List**: every stored entity, optionally filtered, in id order.
/// - **CreateUnless**: find-or-create; skips creation if any entity matches `exists`.
/// - **Upsert**: store under a caller-chosen id, replacing any previous value.
/// - **Replace**: drop every entity matching `scope` and create `params` in its place.
/// - **DeleteWhere**: delete every entity matching `filter`, returning the count.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    CreateUnless {
        exists: Filter<T>,
        params: T::Create,
        respond_to: Response<Ensured<T::Id>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<Filter<T>>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Upsert {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T>,
    },
    Replace {
        scope: Filter<T>,
        params: Vec<T::Create>,
        respond_to: Response<Vec<T::Id>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    DeleteWhere {
        filter: Filter<T>,
        respond_to: Response<usize>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> fmt::Debug for ResourceRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRequest::Create { params, .. } => {
                f.debug_struct("Create").field("params", params).finish()
            }
            ResourceRequest::CreateUnless { params, .. } => {
                f.debug_struct("CreateUnless").field("params", params).finish()
            }
            ResourceRequest::Get { id, .. } => f.debug_struct("Get").field("id", id).finish(),
            ResourceRequest::List { filter, .. } => f
                .debug_struct("List")
                .field("filtered", &filter.is_some())
                .finish(),
            ResourceRequest::Update { id, update, .. } => f
                .debug_struct("Update")
                .field("id", id)
                .field("update", update)
                .finish(),
            ResourceRequest::Upsert { id, params, .. } => f
                .debug_struct("Upsert")
                .field("id", id)
                .field("params", params)
                .finish(),
            ResourceRequest::Replace { params, .. } => {
                f.debug_struct("Replace").field("params", params).finish()
            }
            ResourceRequest::Delete { id, .. } => {
                f.debug_struct("Delete").field("id", id).finish()
            }
            ResourceRequest::DeleteWhere { .. } => f.debug_struct("DeleteWhere").finish(),
            ResourceRequest::Action { id, action, .. } => f
                .debug_struct("Action")
                .field("id", id)
                .field("action", action)
                .finish(),
        }
    }
}
