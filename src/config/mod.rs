use anyhow::Result;
use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub utc_offset_hours: i32,
    pub service_name: String,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("PARKING_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PARKING_SERVICE_PORT")
            .unwrap_or_else(|_| "4000".to_string())
            .parse()?;

        let url =
            env::var("PARKING_DATABASE_URL").unwrap_or_else(|_| "sqlite://parking.db".to_string());
        let max_connections = env::var("PARKING_DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()?;

        // Stamp clock offset relative to UTC; the deployment region runs at -5.
        let utc_offset_hours = env::var("PARKING_UTC_OFFSET_HOURS")
            .unwrap_or_else(|_| "-5".to_string())
            .parse()?;

        Ok(Self {
            server: ServerConfig { host, port },
            database: DatabaseConfig {
                url,
                max_connections,
            },
            utc_offset_hours,
            service_name: "parking-service".to_string(),
        })
    }
}
