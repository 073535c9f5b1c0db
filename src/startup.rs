//! Application startup and lifecycle management.
//!
//! Builds the store handle and the HTTP server, and runs the server until a
//! shutdown signal arrives.

use axum::{
    http::Request,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::error::AppError;
use crate::handlers::{content, diagnostics, health, registration};
use crate::middleware::{propagate_request_id, track_http_metrics, REQUEST_ID_HEADER};
use crate::services::ConferenceDb;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: ConferenceDb,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// The listener is bound here, so a configured port of 0 yields an
    /// ephemeral port, which integration tests rely on. The store handle is
    /// built here too; with no `DATABASE_URL` the service still comes up and
    /// reports the missing store through `/test`.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let db = ConferenceDb::connect(&config.database).await?;

        let state = AppState {
            config: config.clone(),
            db,
        };

        let addr = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Conference service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the server until SIGINT or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(content::root))
        .route("/api/event", get(content::get_event))
        .route("/api/speakers", get(content::get_speakers))
        .route("/api/schedule", get(content::get_schedule))
        .route("/api/sponsors", get(content::get_sponsors))
        .route("/api/register", post(registration::register))
        .route("/test", get(diagnostics::test_database))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics_endpoint))
        .with_state(state)
        .layer(from_fn(track_http_metrics))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(propagate_request_id))
        // The static frontend is served from another origin, so CORS stays
        // wide open.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
