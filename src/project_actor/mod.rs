//! # Project Actor
//!
//! Projects are the registry the allocation engine asks for active titles. A
//! status edit takes effect on the next allocation report; shares are keyed by
//! title and are left alone when a project changes or goes away.

use crate::config::Config;
use crate::lifecycle::open_store;
use crate::model::{Project, ProjectCreate, ProjectId, ProjectUpdate};
use actor_framework::{ActorEntity, ResourceActor, ResourceClient, StorageError};
use async_trait::async_trait;
use std::convert::Infallible;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Project validation error: {0}")]
    ValidationError(String),

    #[error("Project storage error: {0}")]
    StorageError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::error::entity_error_conversions!(ProjectError);

/// Creates a new Project actor and its client.
pub fn new(config: &Config) -> Result<(ResourceActor<Project>, ResourceClient<Project>), StorageError> {
    open_store(config, "projects")
}

#[async_trait]
impl ActorEntity for Project {
    type Id = ProjectId;
    type Create = ProjectCreate;
    type Update = ProjectUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = ProjectError;

    fn id(&self) -> ProjectId {
        self.id
    }

    fn from_create_params(id: ProjectId, params: ProjectCreate) -> Result<Self, Self::Error> {
        if params.title.trim().is_empty() {
            return Err(ProjectError::ValidationError("title must not be blank".into()));
        }
        Ok(Self {
            id,
            title: params.title,
            status: params.status,
            organization: params.organization,
        })
    }

    async fn on_update(&mut self, update: ProjectUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(ProjectError::ValidationError("title must not be blank".into()));
            }
            self.title = title;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(organization) = update.organization {
            self.organization = organization;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
