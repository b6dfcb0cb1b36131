//! # Equipment Actor
//!
//! Same shape as the personnel actor: equipment records, with a share cascade on delete.

pub mod error;

pub use error::*;

use crate::clients::ProjectShareClient;
use crate::config::Config;
use crate::lifecycle::open_store;
use crate::model::{Equipment, EquipmentCreate, EquipmentId, ShareOwner};
use actor_framework::{ActorEntity, ResourceActor, ResourceClient, StorageError};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::debug;

/// Creates a new Equipment actor and its client.
pub fn new(config: &Config) -> Result<(ResourceActor<Equipment>, ResourceClient<Equipment>), StorageError> {
    open_store(config, "equipment")
}

fn validate(name: &str, cost: Option<i64>) -> Result<(), EquipmentError> {
    if name.trim().is_empty() {
        return Err(EquipmentError::ValidationError("name must not be blank".into()));
    }
    if cost.is_some_and(|c| c < 0) {
        return Err(EquipmentError::ValidationError(
            "acquisition_cost must not be negative".into(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Equipment {
    type Id = EquipmentId;
    type Create = EquipmentCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ProjectShareClient;
    type Error = EquipmentError;

    fn id(&self) -> EquipmentId {
        self.id
    }

    fn from_create_params(id: EquipmentId, params: EquipmentCreate) -> Result<Self, Self::Error> {
        validate(&params.name, params.acquisition_cost)?;
        Ok(Self {
            id,
            name: params.name,
            acquisition_cost: params.acquisition_cost,
            acquisition_date: params.acquisition_date,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &Self::Context) -> Result<(), Self::Error> {
        match update {}
    }

    async fn on_delete(&self, shares: &ProjectShareClient) -> Result<(), Self::Error> {
        let removed = shares
            .remove_owner(ShareOwner::Equipment(self.id))
            .await
            .map_err(|e| EquipmentError::ShareCascade(e.to_string()))?;
        debug!(equipment_id = %self.id, removed, "Shares removed");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
