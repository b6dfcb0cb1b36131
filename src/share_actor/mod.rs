//! # Share Actor
//!
//! Stores [`ProjectShare`] rows for both owner kinds. Rows are written only through
//! scoped replacement and removed through owner-wide deletion, never edited.

use crate::config::Config;
use crate::lifecycle::open_store;
use crate::model::{ProjectShare, ProjectShareCreate, ShareId};
use actor_framework::{ActorEntity, ResourceActor, ResourceClient, StorageError};
use async_trait::async_trait;
use std::convert::Infallible;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectShareError {
    #[error("Share not found: {0}")]
    NotFound(String),

    #[error("Share validation error: {0}")]
    ValidationError(String),

    #[error("Share storage error: {0}")]
    StorageError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::error::entity_error_conversions!(ProjectShareError);

/// Creates a new Share actor and its client.
pub fn new(config: &Config) -> Result<(ResourceActor<ProjectShare>, ResourceClient<ProjectShare>), StorageError> {
    open_store(config, "shares")
}

#[async_trait]
impl ActorEntity for ProjectShare {
    type Id = ShareId;
    type Create = ProjectShareCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = ProjectShareError;

    fn id(&self) -> ShareId {
        self.id
    }

    fn from_create_params(id: ShareId, params: ProjectShareCreate) -> Result<Self, Self::Error> {
        if !(params.percent.is_finite() && params.percent > 0.0) {
            return Err(ProjectShareError::ValidationError(format!(
                "percent for {:?} must be a positive number, got {}",
                params.project_title, params.percent
            )));
        }
        Ok(Self {
            id,
            owner: params.owner,
            project_title: params.project_title,
            percent: params.percent,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
