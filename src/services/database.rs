//! Database service for parking-service.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::models::{NewRegistration, NewTariff, Registration, Tariff};

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the SQLite database behind `database_url`.
    #[instrument(skip(database_url))]
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        info!(max_connections, "Opening SQLite database");

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::Database(anyhow::anyhow!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("SQLite connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Database(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Tariff operations
    // -------------------------------------------------------------------------

    /// Fetch every tariff row.
    #[instrument(skip(self))]
    pub async fn list_tariffs(&self) -> Result<Vec<Tariff>, AppError> {
        sqlx::query_as::<_, Tariff>(
            "SELECT id, name, description, unit_cost, last_modified FROM tariffs",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(anyhow::anyhow!("Failed to list tariffs: {}", e)))
    }

    /// Fetch one tariff by id.
    #[instrument(skip(self))]
    pub async fn get_tariff(&self, id: i64) -> Result<Option<Tariff>, AppError> {
        sqlx::query_as::<_, Tariff>(
            "SELECT id, name, description, unit_cost, last_modified FROM tariffs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(anyhow::anyhow!("Failed to fetch tariff {}: {}", id, e)))
    }

    /// Insert a tariff and return the stored row.
    #[instrument(skip(self, input))]
    pub async fn insert_tariff(&self, input: &NewTariff) -> Result<Tariff, AppError> {
        sqlx::query_as::<_, Tariff>(
            r#"
            INSERT INTO tariffs (name, description, unit_cost, last_modified)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, description, unit_cost, last_modified
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.unit_cost)
        .bind(input.last_modified)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(anyhow::anyhow!("Failed to insert tariff: {}", e)))
    }

    /// Write back a fully merged tariff row.
    #[instrument(skip(self, tariff), fields(id = tariff.id))]
    pub async fn update_tariff(&self, tariff: &Tariff) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE tariffs
            SET name = ?, description = ?, unit_cost = ?, last_modified = ?
            WHERE id = ?
            "#,
        )
        .bind(&tariff.name)
        .bind(&tariff.description)
        .bind(tariff.unit_cost)
        .bind(tariff.last_modified)
        .bind(tariff.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::Database(anyhow::anyhow!("Failed to update tariff {}: {}", tariff.id, e))
        })?;
        Ok(())
    }

    /// Delete a tariff; returns the number of rows removed.
    #[instrument(skip(self))]
    pub async fn delete_tariff(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM tariffs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::Database(anyhow::anyhow!("Failed to delete tariff {}: {}", id, e))
            })?;
        Ok(result.rows_affected())
    }

    // -------------------------------------------------------------------------
    // Registration operations
    // -------------------------------------------------------------------------

    /// Fetch every registration row.
    #[instrument(skip(self))]
    pub async fn list_registrations(&self) -> Result<Vec<Registration>, AppError> {
        sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, name, registered_date, registered_time, vehicle,
                   hours_parked, total_cost, tariff_id, modified_date
            FROM registrations
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(anyhow::anyhow!("Failed to list registrations: {}", e)))
    }

    /// Fetch one registration by id.
    #[instrument(skip(self))]
    pub async fn get_registration(&self, id: i64) -> Result<Option<Registration>, AppError> {
        sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, name, registered_date, registered_time, vehicle,
                   hours_parked, total_cost, tariff_id, modified_date
            FROM registrations
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::Database(anyhow::anyhow!("Failed to fetch registration {}: {}", id, e))
        })
    }

    /// Insert a registration and return the stored row.
    #[instrument(skip(self, input), fields(vehicle = %input.vehicle, tariff_id = input.tariff_id))]
    pub async fn insert_registration(
        &self,
        input: &NewRegistration,
    ) -> Result<Registration, AppError> {
        sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations
                (name, registered_date, registered_time, vehicle, hours_parked, total_cost, tariff_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, registered_date, registered_time, vehicle,
                      hours_parked, total_cost, tariff_id, modified_date
            "#,
        )
        .bind(&input.name)
        .bind(input.registered_date)
        .bind(input.registered_time)
        .bind(&input.vehicle)
        .bind(input.hours_parked)
        .bind(input.total_cost)
        .bind(input.tariff_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(anyhow::anyhow!("Failed to insert registration: {}", e)))
    }

    /// Write back a fully merged registration row. Arrival stamps are not
    /// part of the statement, so they can never drift after insert.
    #[instrument(skip(self, registration), fields(id = registration.id))]
    pub async fn update_registration(&self, registration: &Registration) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE registrations
            SET name = ?, vehicle = ?, hours_parked = ?, total_cost = ?,
                tariff_id = ?, modified_date = ?
            WHERE id = ?
            "#,
        )
        .bind(&registration.name)
        .bind(&registration.vehicle)
        .bind(registration.hours_parked)
        .bind(registration.total_cost)
        .bind(registration.tariff_id)
        .bind(registration.modified_date)
        .bind(registration.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::Database(anyhow::anyhow!(
                "Failed to update registration {}: {}",
                registration.id,
                e
            ))
        })?;
        Ok(())
    }

    /// Delete a registration; returns the number of rows removed.
    #[instrument(skip(self))]
    pub async fn delete_registration(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::Database(anyhow::anyhow!("Failed to delete registration {}: {}", id, e))
            })?;
        Ok(result.rows_affected())
    }
}
