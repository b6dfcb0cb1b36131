//! Free-text progress notes, one row per order.

use crate::model::ProcessOrderId;
use serde::{Deserialize, Serialize};

/// Stored under its order's id; writing it again replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProgress {
    pub order_id: ProcessOrderId,
    pub stage: Option<String>,
    pub material_status: Option<String>,
    pub inspection_status: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderProgressInput {
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub material_status: Option<String>,
    #[serde(default)]
    pub inspection_status: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl OrderProgress {
    pub fn new(order_id: ProcessOrderId, input: OrderProgressInput) -> Self {
        Self {
            order_id,
            stage: input.stage,
            material_status: input.material_status,
            inspection_status: input.inspection_status,
            note: input.note,
        }
    }
}
