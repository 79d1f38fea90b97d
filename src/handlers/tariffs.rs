//! Tariff CRUD handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    dtos::{InsertTariffBody, MessageResponse, TariffResponse},
    error::AppError,
    models::{NewTariff, TariffChanges},
};

/// List every tariff.
pub async fn list_tariffs(
    State(state): State<AppState>,
) -> Result<Json<Vec<TariffResponse>>, AppError> {
    let tariffs = state.db.list_tariffs().await?;
    tracing::debug!(count = tariffs.len(), "Listing tariffs");
    Ok(Json(
        tariffs.into_iter().map(TariffResponse::from).collect(),
    ))
}

/// Get one tariff by id.
///
/// A miss answers 200 with an empty array rather than 404: callers treat
/// the result as a filtered list of at most one element.
pub async fn get_tariff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<TariffResponse>>, AppError> {
    let tariff = state.db.get_tariff(id).await?;
    Ok(Json(tariff.into_iter().map(TariffResponse::from).collect()))
}

/// Insert a tariff. `description` and `unitCost` are mandatory; the row is
/// stamped with today's date before it is persisted.
pub async fn insert_tariff(
    State(state): State<AppState>,
    Json(body): Json<InsertTariffBody>,
) -> Result<Json<TariffResponse>, AppError> {
    let (description, unit_cost) = match (body.description, body.unit_cost) {
        (Some(description), Some(unit_cost)) => (description, unit_cost),
        _ => {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Missing required fields: description and unitCost"
            )));
        }
    };

    tracing::info!(description = %description, unit_cost, "Inserting tariff");

    let tariff = state
        .db
        .insert_tariff(&NewTariff {
            name: body.name,
            description,
            unit_cost,
            last_modified: state.clock.today(),
        })
        .await?;

    Ok(Json(TariffResponse::from(tariff)))
}

/// Partially update a tariff. Unsupplied fields keep their stored values;
/// the modification stamp is refreshed on every successful update.
pub async fn update_tariff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(changes): Json<TariffChanges>,
) -> Result<Json<TariffResponse>, AppError> {
    if changes.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "No fields to update: provide at least one of name, description or unitCost"
        )));
    }

    let current = state
        .db
        .get_tariff(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Tariff with id {} not found", id)))?;

    let mut merged = changes.merge_into(&current);
    merged.last_modified = Some(state.clock.today());

    tracing::info!(id, "Updating tariff");
    state.db.update_tariff(&merged).await?;

    let updated = state
        .db
        .get_tariff(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Tariff with id {} not found", id)))?;

    Ok(Json(TariffResponse::from(updated)))
}

/// Delete a tariff. Zero rows affected is reported as not found.
pub async fn delete_tariff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let removed = state.db.delete_tariff(id).await?;
    if removed == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "Tariff with id {} not found",
            id
        )));
    }

    tracing::info!(id, "Tariff deleted");
    Ok(Json(MessageResponse {
        message: format!("Tariff with id {} deleted", id),
    }))
}
