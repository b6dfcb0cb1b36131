//! Percentage shares linking personnel and equipment to projects.
//!
//! A [`ProjectShare`] row says "this owner spends `percent` of its cost on the project
//! titled `project_title`". Rows are never edited; an owner's whole row set is replaced
//! from a [`ShareReplacement`] payload.

use crate::model::{EquipmentId, PersonnelId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

resource_id!(ShareId, "share");

/// The record a share belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id")]
pub enum ShareOwner {
    Personnel(PersonnelId),
    Equipment(EquipmentId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerKind {
    Personnel,
    Equipment,
}

impl ShareOwner {
    pub fn kind(&self) -> OwnerKind {
        match self {
            ShareOwner::Personnel(_) => OwnerKind::Personnel,
            ShareOwner::Equipment(_) => OwnerKind::Equipment,
        }
    }
}

impl fmt::Display for ShareOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareOwner::Personnel(id) => fmt::Display::fmt(id, f),
            ShareOwner::Equipment(id) => fmt::Display::fmt(id, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectShare {
    pub id: ShareId,
    pub owner: ShareOwner,
    pub project_title: String,
    /// In `(0, 100]` by convention; only positivity is enforced.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectShareCreate {
    pub owner: ShareOwner,
    pub project_title: String,
    pub percent: f64,
}

/// Body of a share replacement: project title to percent.
///
/// Values are read leniently. JSON numbers and numeric strings are accepted; anything
/// else, and any value that is not a finite number above zero, is dropped without error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareReplacement {
    #[serde(default)]
    pub shares: BTreeMap<String, Value>,
}

impl ShareReplacement {
    pub fn from_percents<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            shares: entries
                .into_iter()
                .map(|(title, percent)| (title.into(), Value::from(percent)))
                .collect(),
        }
    }

    /// Entries that survive lenient parsing, in title order.
    pub fn accepted(&self) -> Vec<(String, f64)> {
        self.shares
            .iter()
            .filter_map(|(title, raw)| lenient_percent(raw).map(|p| (title.clone(), p)))
            .collect()
    }

    /// How many entries `accepted` drops.
    pub fn rejected_count(&self) -> usize {
        self.shares
            .values()
            .filter(|raw| lenient_percent(raw).is_none())
            .count()
    }
}

fn lenient_percent(raw: &Value) -> Option<f64> {
    let value = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (value.is_finite() && value > 0.0).then_some(value)
}
