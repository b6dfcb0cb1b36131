//! A piece of equipment whose acquisition cost is prorated across active projects.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for equipment records.
    EquipmentId,
    "equipment"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub acquisition_cost: Option<i64>,
    pub acquisition_date: NaiveDate,
}

impl Equipment {
    pub fn base_value(&self) -> i64 {
        self.acquisition_cost.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCreate {
    pub name: String,
    #[serde(default)]
    pub acquisition_cost: Option<i64>,
    pub acquisition_date: NaiveDate,
}
