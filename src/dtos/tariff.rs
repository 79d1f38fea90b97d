use serde::{Deserialize, Serialize};

use crate::models::Tariff;
use crate::services::clock;

/// Insert request body. Every field is optional at the wire level; the
/// handler rejects missing required fields before touching the store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTariffBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit_cost: Option<f64>,
}

/// Shaped tariff record as exposed over HTTP.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffResponse {
    pub id: i64,
    pub name: Option<String>,
    pub description: String,
    pub unit_cost: f64,
    pub last_modified: Option<String>,
}

impl From<Tariff> for TariffResponse {
    fn from(tariff: Tariff) -> Self {
        Self {
            id: tariff.id,
            name: tariff.name,
            description: tariff.description,
            unit_cost: tariff.unit_cost,
            last_modified: tariff.last_modified.map(clock::format_date),
        }
    }
}
