use serde::{Deserialize, Serialize};

use crate::models::Registration;
use crate::services::{clock, pricing};

/// Insert request body. Every field is optional at the wire level; the
/// handler rejects missing required fields before touching the store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertRegistrationBody {
    pub name: Option<String>,
    pub vehicle: Option<String>,
    pub hours_parked: Option<i64>,
    pub tariff_id: Option<i64>,
}

/// Shaped registration record as exposed over HTTP: stamps rendered for
/// display and the stored tax-inclusive total split into subtotal and tax.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub id: i64,
    pub name: Option<String>,
    pub registered_date: String,
    pub registered_time: String,
    pub vehicle: String,
    pub hours_parked: i64,
    pub total_cost: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub tariff_id: i64,
    pub modified_date: Option<String>,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        let (subtotal, tax) = pricing::decompose(registration.total_cost);
        Self {
            id: registration.id,
            name: registration.name,
            registered_date: clock::format_date(registration.registered_date),
            registered_time: clock::format_time(registration.registered_time),
            vehicle: registration.vehicle,
            hours_parked: registration.hours_parked,
            total_cost: registration.total_cost,
            subtotal,
            tax,
            tariff_id: registration.tariff_id,
            modified_date: registration.modified_date.map(clock::format_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_response_attaches_decomposed_totals_and_formats_stamps() {
        let registration = Registration {
            id: 1,
            name: None,
            registered_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            registered_time: NaiveTime::from_hms_opt(7, 4, 9).unwrap(),
            vehicle: "ABC-123".to_string(),
            hours_parked: 3,
            total_cost: 150.0,
            tariff_id: 1,
            modified_date: None,
        };

        let response = RegistrationResponse::from(registration);
        assert_eq!(response.subtotal, 127.12);
        assert_eq!(response.tax, 22.88);
        assert_eq!(response.registered_date, "2024-05-03");
        assert_eq!(response.registered_time, "07:04:09");
        assert_eq!(response.modified_date, None);
    }
}
