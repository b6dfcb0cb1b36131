//! Production tracking rows attached to an order.

use crate::model::ProcessOrderId;
use serde::{Deserialize, Serialize};

resource_id!(TrackingId, "tracking");

/// Free-form production metrics. All optional; a freshly created default row has none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingMetrics {
    #[serde(default)]
    pub line: Option<String>,
    #[serde(default)]
    pub produced_quantity: Option<u32>,
    #[serde(default)]
    pub defect_quantity: Option<u32>,
    #[serde(default)]
    pub cycle_time_minutes: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessTracking {
    pub id: TrackingId,
    pub order_id: ProcessOrderId,
    #[serde(flatten)]
    pub metrics: TrackingMetrics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessTrackingCreate {
    pub order_id: ProcessOrderId,
    pub metrics: TrackingMetrics,
}
