//! Tariff model: an hourly price band for parked vehicles.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored tariff row.
///
/// `name` and `last_modified` are nullable: both columns arrived in a later
/// schema revision and pre-existing rows were never backfilled.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tariff {
    pub id: i64,
    pub name: Option<String>,
    pub description: String,
    pub unit_cost: f64,
    pub last_modified: Option<NaiveDate>,
}

/// Input for inserting a tariff.
#[derive(Debug, Clone)]
pub struct NewTariff {
    pub name: Option<String>,
    pub description: String,
    pub unit_cost: f64,
    pub last_modified: NaiveDate,
}

/// Partial update for a tariff; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TariffChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit_cost: Option<f64>,
}

impl TariffChanges {
    /// True when the client supplied nothing to change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.unit_cost.is_none()
    }

    /// Overlay these changes on `current`, producing the full row to write
    /// back. The caller refreshes `last_modified` before the write.
    pub fn merge_into(&self, current: &Tariff) -> Tariff {
        Tariff {
            id: current.id,
            name: self.name.clone().or_else(|| current.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            unit_cost: self.unit_cost.unwrap_or(current.unit_cost),
            last_modified: current.last_modified,
        }
    }
}
