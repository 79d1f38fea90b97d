//! Common test utilities for parking-service integration tests.

#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;

use parking_service::config::{Config, DatabaseConfig, ServerConfig};
use parking_service::startup::Application;
use serde_json::{Value, json};
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,parking_service=debug,sqlx=warn")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    // Keeps the throwaway database directory alive for the app's lifetime.
    _db_dir: TempDir,
}

impl TestApp {
    /// Spawn the full service on a random port against a fresh database.
    pub async fn spawn() -> Self {
        init_tracing();

        let db_dir = tempfile::tempdir().expect("Failed to create temp database directory");
        let db_path = db_dir.path().join("parking.db");

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port for testing
            },
            database: DatabaseConfig {
                url: format!("sqlite://{}", db_path.display()),
                max_connections: 2,
            },
            utc_offset_hours: -5,
            service_name: "parking-service-test".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("http://127.0.0.1:{}/health", port);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            client,
            _db_dir: db_dir,
        }
    }

    /// Insert a tariff and return the response body.
    pub async fn insert_tariff(&self, description: &str, unit_cost: f64) -> Value {
        let response = self
            .client
            .post(format!("{}/insertarTarifa", self.address))
            .json(&json!({ "description": description, "unitCost": unit_cost }))
            .send()
            .await
            .expect("Failed to execute insert tariff request");
        assert!(
            response.status().is_success(),
            "tariff insert failed: {}",
            response.status()
        );
        response.json().await.expect("Tariff body was not JSON")
    }

    /// Insert a registration against `tariff_id` and return the response body.
    pub async fn insert_registration(
        &self,
        vehicle: &str,
        hours_parked: i64,
        tariff_id: i64,
    ) -> Value {
        let response = self
            .client
            .post(format!("{}/insertarRegistro", self.address))
            .json(&json!({
                "vehicle": vehicle,
                "hoursParked": hours_parked,
                "tariffId": tariff_id
            }))
            .send()
            .await
            .expect("Failed to execute insert registration request");
        assert!(
            response.status().is_success(),
            "registration insert failed: {}",
            response.status()
        );
        response
            .json()
            .await
            .expect("Registration body was not JSON")
    }
}
