//! # Order Actor
//!
//! Owns process orders. Derived prices are recomputed on every write and status
//! transitions trigger their side effects from the entity hooks (see [`entity`]).

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProcessTrackingClient;
use crate::clock::Clock;
use crate::config::Config;
use crate::lifecycle::open_store;
use crate::model::ProcessOrder;
use actor_framework::{ResourceActor, ResourceClient, StorageError};
use std::sync::Arc;

/// Dependencies injected into the order actor at `run()` time.
#[derive(Clone)]
pub struct OrderContext {
    pub tracking: ProcessTrackingClient,
    pub clock: Arc<dyn Clock>,
}

/// Creates a new Order actor and its client.
pub fn new(
    config: &Config,
) -> Result<(ResourceActor<ProcessOrder>, ResourceClient<ProcessOrder>), StorageError> {
    open_store(config, "orders")
}
