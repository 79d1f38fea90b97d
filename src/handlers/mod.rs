//! HTTP handlers for parking-service.

pub mod health;
pub mod registrations;
pub mod tariffs;

pub use health::health_check;
pub use registrations::{
    delete_registration, get_registration, insert_registration, list_registrations,
    update_registration,
};
pub use tariffs::{delete_tariff, get_tariff, insert_tariff, list_tariffs, update_tariff};

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Fallback for unmatched routes: a JSON body instead of the framework's
/// empty 404.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Resource not found" })),
    )
}
