//! # Progress Actor
//!
//! One free-text progress row per order, stored under the order's own id. Writes are
//! upserts; the order must exist.

use crate::clients::ProcessOrderClient;
use crate::config::Config;
use crate::lifecycle::open_store;
use crate::model::{OrderProgress, OrderProgressInput, ProcessOrderId};
use actor_framework::{ActorClient, ActorEntity, ResourceActor, ResourceClient, StorageError};
use async_trait::async_trait;
use std::convert::Infallible;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderProgressError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order lookup failed: {0}")]
    OrderLookup(String),

    #[error("Progress storage error: {0}")]
    StorageError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::error::entity_error_conversions!(OrderProgressError);

/// Creates a new Progress actor and its client.
pub fn new(
    config: &Config,
) -> Result<(ResourceActor<OrderProgress>, ResourceClient<OrderProgress>), StorageError> {
    open_store(config, "progress")
}

#[async_trait]
impl ActorEntity for OrderProgress {
    type Id = ProcessOrderId;
    type Create = OrderProgressInput;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ProcessOrderClient;
    type Error = OrderProgressError;

    fn id(&self) -> ProcessOrderId {
        self.order_id
    }

    fn from_create_params(id: ProcessOrderId, params: OrderProgressInput) -> Result<Self, Self::Error> {
        Ok(OrderProgress::new(id, params))
    }

    async fn on_create(&mut self, orders: &ProcessOrderClient) -> Result<(), Self::Error> {
        match orders.get(self.order_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(OrderProgressError::NotFound(self.order_id.to_string())),
            Err(e) => Err(OrderProgressError::OrderLookup(e.to_string())),
        }
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &ProcessOrderClient) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &ProcessOrderClient) -> Result<(), Self::Error> {
        match action {}
    }
}
