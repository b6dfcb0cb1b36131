//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{Ensured, Filter, ResourceRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type-safe, async API for interacting with a
/// `ResourceActor<T>`. Requests travel over a Tokio mpsc channel and results come back on
/// a oneshot channel. Cloning is cheap (only the sender is cloned) and clones can be shared
/// across tasks.
///
/// When the last clone is dropped the actor's run loop ends.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    /// Creates `params` unless a stored entity satisfies `exists`.
    ///
    /// The check and the insert happen in one actor turn, so concurrent callers
    /// cannot both create.
    pub async fn create_unless<F>(
        &self,
        exists: F,
        params: T::Create,
    ) -> Result<Ensured<T::Id>, FrameworkError>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let exists: Filter<T> = Box::new(exists);
        self.request(|respond_to| ResourceRequest::CreateUnless {
            exists,
            params,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Every stored entity, in id order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List {
            filter: None,
            respond_to,
        })
        .await
    }

    /// Stored entities matching `filter`, in id order.
    pub async fn list_where<F>(&self, filter: F) -> Result<Vec<T>, FrameworkError>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let filter: Filter<T> = Box::new(filter);
        self.request(|respond_to| ResourceRequest::List {
            filter: Some(filter),
            respond_to,
        })
        .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    /// Stores an entity built from `params` under `id`, replacing any existing one.
    pub async fn upsert(&self, id: T::Id, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Upsert {
            id,
            params,
            respond_to,
        })
        .await
    }

    /// Deletes every entity matching `scope` and creates one entity per element of
    /// `params`, as a single unit. Returns the new ids in `params` order.
    pub async fn replace<F>(&self, scope: F, params: Vec<T::Create>) -> Result<Vec<T::Id>, FrameworkError>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let scope: Filter<T> = Box::new(scope);
        self.request(|respond_to| ResourceRequest::Replace {
            scope,
            params,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Deletes every entity matching `filter` and returns how many were removed.
    pub async fn delete_where<F>(&self, filter: F) -> Result<usize, FrameworkError>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let filter: Filter<T> = Box::new(filter);
        self.request(|respond_to| ResourceRequest::DeleteWhere { filter, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
