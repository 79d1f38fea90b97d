//! Application assembly: shared state, the route table and the listener.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::services::{Database, OffsetClock};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub clock: OffsetClock,
    pub config: Config,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Open the store, run migrations and bind the listener.
    ///
    /// Binding happens here rather than in `run_until_stopped` so callers
    /// can request port 0 and read the real port back for test harnesses.
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let db = Database::new(&config.database.url, config.database.max_connections).await?;
        db.run_migrations().await?;

        let clock = OffsetClock::from_hours(config.utc_offset_hours);
        let state = AppState {
            db,
            clock,
            config: config.clone(),
        };

        let router = Router::new()
            .route("/health", get(handlers::health_check))
            // Tariff endpoints
            .route("/tarifas", get(handlers::list_tariffs))
            .route("/tarifaID/:id", get(handlers::get_tariff))
            .route("/insertarTarifa", post(handlers::insert_tariff))
            .route("/editarTarifa/:id", put(handlers::update_tariff))
            .route("/eliminarTarifa/:id", delete(handlers::delete_tariff))
            // Registration endpoints
            .route("/registros", get(handlers::list_registrations))
            .route("/registroID/:id", get(handlers::get_registration))
            .route("/insertarRegistro", post(handlers::insert_registration))
            .route("/editarRegistro/:id", put(handlers::update_registration))
            .route(
                "/eliminarRegistro/:id",
                delete(handlers::delete_registration),
            )
            .fallback(handlers::not_found)
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let listener =
            TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }
}
