//! A staff member whose salary is prorated across active projects.
//!
//! Implements [`ActorEntity`](actor_framework::ActorEntity) in
//! [`personnel_actor`](crate::personnel_actor); deleting a person also deletes their shares.
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for personnel records.
    PersonnelId,
    "personnel"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personnel {
    pub id: PersonnelId,
    pub name: String,
    pub department: String,
    /// Annual salary in won. Unknown salaries allocate nothing.
    pub annual_salary: Option<i64>,
}

impl Personnel {
    /// The amount prorated by share percentages.
    pub fn base_value(&self) -> i64 {
        self.annual_salary.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonnelCreate {
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub annual_salary: Option<i64>,
}
