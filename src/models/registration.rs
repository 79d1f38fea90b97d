//! Registration model: one parked stay priced against a tariff.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored registration row.
///
/// `registered_date` and `registered_time` are fixed when the vehicle
/// arrives; updates never touch them. `name` and `modified_date` are
/// nullable columns from a later schema revision.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub id: i64,
    pub name: Option<String>,
    pub registered_date: NaiveDate,
    pub registered_time: NaiveTime,
    pub vehicle: String,
    pub hours_parked: i64,
    pub total_cost: f64,
    pub tariff_id: i64,
    pub modified_date: Option<NaiveDate>,
}

/// Input for inserting a registration.
///
/// `total_cost` is derived from the referenced tariff before insert, never
/// taken from the client.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub name: Option<String>,
    pub registered_date: NaiveDate,
    pub registered_time: NaiveTime,
    pub vehicle: String,
    pub hours_parked: i64,
    pub total_cost: f64,
    pub tariff_id: i64,
}

/// Partial update for a registration; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationChanges {
    pub name: Option<String>,
    pub vehicle: Option<String>,
    pub hours_parked: Option<i64>,
    pub tariff_id: Option<i64>,
}

impl RegistrationChanges {
    /// True when the client supplied nothing to change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.vehicle.is_none()
            && self.hours_parked.is_none()
            && self.tariff_id.is_none()
    }

    /// Overlay these changes on `current`. Arrival stamps carry over
    /// untouched; the caller re-derives `total_cost` and stamps
    /// `modified_date` on the merged row before writing it.
    pub fn merge_into(&self, current: &Registration) -> Registration {
        Registration {
            id: current.id,
            name: self.name.clone().or_else(|| current.name.clone()),
            registered_date: current.registered_date,
            registered_time: current.registered_time,
            vehicle: self
                .vehicle
                .clone()
                .unwrap_or_else(|| current.vehicle.clone()),
            hours_parked: self.hours_parked.unwrap_or(current.hours_parked),
            total_cost: current.total_cost,
            tariff_id: self.tariff_id.unwrap_or(current.tariff_id),
            modified_date: current.modified_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_registration() -> Registration {
        Registration {
            id: 3,
            name: Some("J. Rivera".to_string()),
            registered_date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            registered_time: NaiveTime::from_hms_opt(8, 45, 0).unwrap(),
            vehicle: "ABC-123".to_string(),
            hours_parked: 3,
            total_cost: 150.0,
            tariff_id: 1,
            modified_date: None,
        }
    }

    #[test]
    fn test_merge_keeps_unsupplied_fields() {
        let changes = RegistrationChanges {
            hours_parked: Some(5),
            ..Default::default()
        };
        let merged = changes.merge_into(&stored_registration());
        assert_eq!(merged.id, 3);
        assert_eq!(merged.vehicle, "ABC-123");
        assert_eq!(merged.hours_parked, 5);
        assert_eq!(merged.tariff_id, 1);
        assert_eq!(merged.name.as_deref(), Some("J. Rivera"));
    }

    #[test]
    fn test_merge_never_touches_arrival_stamps() {
        let changes = RegistrationChanges {
            vehicle: Some("XYZ-999".to_string()),
            hours_parked: Some(8),
            tariff_id: Some(2),
            name: Some("M. Quispe".to_string()),
        };
        let current = stored_registration();
        let merged = changes.merge_into(&current);
        assert_eq!(merged.registered_date, current.registered_date);
        assert_eq!(merged.registered_time, current.registered_time);
    }

    #[test]
    fn test_empty_changes_are_detected() {
        assert!(RegistrationChanges::default().is_empty());
        let changes = RegistrationChanges {
            tariff_id: Some(4),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_changes_deserialize_from_camel_case() {
        let changes: RegistrationChanges =
            serde_json::from_str(r#"{"hoursParked": 6, "tariffId": 2}"#)
                .expect("body should deserialize");
        assert_eq!(changes.hours_parked, Some(6));
        assert_eq!(changes.tariff_id, Some(2));
        assert!(changes.vehicle.is_none());
    }
}
