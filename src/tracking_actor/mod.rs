//! # Tracking Actor
//!
//! Production tracking rows. The order actor asks for one default row per order when
//! the order enters production; users may add further rows by hand.

pub mod error;

pub use error::*;

use crate::config::Config;
use crate::lifecycle::open_store;
use crate::model::{ProcessTracking, ProcessTrackingCreate, TrackingId, TrackingMetrics};
use actor_framework::{ActorEntity, ResourceActor, ResourceClient, StorageError};
use async_trait::async_trait;
use std::convert::Infallible;

/// Creates a new Tracking actor and its client.
pub fn new(
    config: &Config,
) -> Result<(ResourceActor<ProcessTracking>, ResourceClient<ProcessTracking>), StorageError> {
    open_store(config, "tracking")
}

fn validate(metrics: &TrackingMetrics) -> Result<(), ProcessTrackingError> {
    if let (Some(produced), Some(defects)) = (metrics.produced_quantity, metrics.defect_quantity) {
        if defects > produced {
            return Err(ProcessTrackingError::ValidationError(format!(
                "defect_quantity {defects} exceeds produced_quantity {produced}"
            )));
        }
    }
    if metrics
        .cycle_time_minutes
        .is_some_and(|m| !m.is_finite() || m < 0.0)
    {
        return Err(ProcessTrackingError::ValidationError(
            "cycle_time_minutes must be a non-negative number".into(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for ProcessTracking {
    type Id = TrackingId;
    type Create = ProcessTrackingCreate;
    /// Replaces the row's metrics wholesale.
    type Update = TrackingMetrics;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = ProcessTrackingError;

    fn id(&self) -> TrackingId {
        self.id
    }

    fn from_create_params(id: TrackingId, params: ProcessTrackingCreate) -> Result<Self, Self::Error> {
        validate(&params.metrics)?;
        Ok(Self {
            id,
            order_id: params.order_id,
            metrics: params.metrics,
        })
    }

    async fn on_update(&mut self, metrics: TrackingMetrics, _ctx: &()) -> Result<(), Self::Error> {
        validate(&metrics)?;
        self.metrics = metrics;
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
