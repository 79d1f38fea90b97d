//! Registration CRUD handlers.
//!
//! Registration writes always re-derive the stored total from the effective
//! hours and the referenced tariff's current unit cost; the client never
//! supplies a price.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    dtos::{InsertRegistrationBody, MessageResponse, RegistrationResponse},
    error::AppError,
    models::{NewRegistration, RegistrationChanges},
    services::pricing,
};

/// List every registration, shaped.
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegistrationResponse>>, AppError> {
    let registrations = state.db.list_registrations().await?;
    tracing::debug!(count = registrations.len(), "Listing registrations");
    Ok(Json(
        registrations
            .into_iter()
            .map(RegistrationResponse::from)
            .collect(),
    ))
}

/// Get one registration by id. Same miss contract as tariffs: 200 with an
/// empty array.
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<RegistrationResponse>>, AppError> {
    let registration = state.db.get_registration(id).await?;
    Ok(Json(
        registration
            .into_iter()
            .map(RegistrationResponse::from)
            .collect(),
    ))
}

/// Insert a registration.
///
/// Required fields are checked before any store access. The referenced
/// tariff must exist; its unit cost prices the stay and the arrival stamps
/// come from the service clock, never the client.
pub async fn insert_registration(
    State(state): State<AppState>,
    Json(body): Json<InsertRegistrationBody>,
) -> Result<Json<RegistrationResponse>, AppError> {
    let (vehicle, hours_parked, tariff_id) =
        match (body.vehicle, body.hours_parked, body.tariff_id) {
            (Some(vehicle), Some(hours_parked), Some(tariff_id)) => {
                (vehicle, hours_parked, tariff_id)
            }
            _ => {
                return Err(AppError::BadRequest(anyhow::anyhow!(
                    "Missing required fields: vehicle, hoursParked and tariffId"
                )));
            }
        };

    let tariff = state.db.get_tariff(tariff_id).await?.ok_or_else(|| {
        AppError::NotFound(anyhow::anyhow!("Tariff with id {} not found", tariff_id))
    })?;

    let now = state.clock.now();
    let registration = state
        .db
        .insert_registration(&NewRegistration {
            name: body.name,
            registered_date: now.date(),
            registered_time: now.time(),
            vehicle,
            hours_parked,
            total_cost: pricing::total_cost(hours_parked, tariff.unit_cost),
            tariff_id,
        })
        .await?;

    tracing::info!(
        id = registration.id,
        vehicle = %registration.vehicle,
        total_cost = registration.total_cost,
        "Registration created"
    );

    Ok(Json(RegistrationResponse::from(registration)))
}

/// Partially update a registration.
///
/// The stored total is recomputed from the merged row against the
/// referenced tariff's current price, so any edit re-prices the stay even
/// when hours and tariff were untouched.
pub async fn update_registration(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(changes): Json<RegistrationChanges>,
) -> Result<Json<RegistrationResponse>, AppError> {
    if changes.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "No fields to update: provide at least one of name, vehicle, hoursParked or tariffId"
        )));
    }

    let current = state.db.get_registration(id).await?.ok_or_else(|| {
        AppError::NotFound(anyhow::anyhow!("Registration with id {} not found", id))
    })?;

    let mut merged = changes.merge_into(&current);

    let tariff = state.db.get_tariff(merged.tariff_id).await?.ok_or_else(|| {
        AppError::NotFound(anyhow::anyhow!(
            "Tariff with id {} not found",
            merged.tariff_id
        ))
    })?;

    merged.total_cost = pricing::total_cost(merged.hours_parked, tariff.unit_cost);
    merged.modified_date = Some(state.clock.today());

    tracing::info!(id, total_cost = merged.total_cost, "Updating registration");
    state.db.update_registration(&merged).await?;

    let updated = state.db.get_registration(id).await?.ok_or_else(|| {
        AppError::NotFound(anyhow::anyhow!("Registration with id {} not found", id))
    })?;

    Ok(Json(RegistrationResponse::from(updated)))
}

/// Delete a registration. The confirmation names the id whether or not a
/// row was actually removed; absent rows are not an error here.
pub async fn delete_registration(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let removed = state.db.delete_registration(id).await?;
    tracing::info!(id, removed, "Registration delete processed");
    Ok(Json(MessageResponse {
        message: format!("Registration with id {} deleted", id),
    }))
}
