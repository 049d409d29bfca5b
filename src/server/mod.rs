//! HTTP boundary for the catalog.
//!
//! - `GET /api/courses` lists every course in dataset order
//! - `GET /api/courses/{id}` returns one course, or `404 {"error": "Course not found"}`
//!   for unknown and malformed ids alike; a trailing slash is accepted, and
//!   `/api/courses/` (no id) is treated as an unknown course
//! - `GET /health` reports the course count and load time
//!
//! The frontend is served from another origin, so CORS allows `GET` from the
//! configured origins (any origin when none are configured).

use std::{future::Future, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub mod error;
pub mod routes;

use crate::config::TomlConfig;
use crate::core::catalog::CatalogService;
use crate::utils::error::{CatalogError, Result};
use routes::{fallback, get_course, health, list_courses, missing_course_id};

pub fn api_routes() -> Router<CatalogService> {
    Router::new()
        .route("/api/courses", get(list_courses))
        .route("/api/courses/", get(missing_course_id))
        .route("/api/courses/{id}", get(get_course))
        .route("/api/courses/{id}/", get(get_course))
        .route("/health", get(health))
        .fallback(fallback)
}

pub fn build_router(service: CatalogService, config: &TomlConfig) -> Result<Router> {
    Ok(with_layers(api_routes(), config)?.with_state(service))
}

/// Wraps `router` in the timeout (408), CORS and trace layers.
pub fn with_layers(
    router: Router<CatalogService>,
    config: &TomlConfig,
) -> Result<Router<CatalogService>> {
    let cors = cors_layer(config)?;

    Ok(router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_seconds),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(config: &TomlConfig) -> Result<CorsLayer> {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| CatalogError::InvalidConfigValueError {
                    field: "cors.allowed_origins".to_string(),
                    value: origin.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(origin)
        .max_age(Duration::from_secs(60 * 60)))
}

/// Binds the configured address and serves until SIGINT/SIGTERM.
pub async fn start_server(service: CatalogService, config: &TomlConfig) -> Result<()> {
    let app = build_router(service, config)?;

    let address = config.bind_address()?;
    info!("Binding to {address}");

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| CatalogError::BindError {
            address: address.to_string(),
            source,
        })?;

    serve(listener, app, shutdown_signal()).await
}

pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(address) = listener.local_addr() {
        info!("🚀 Server running on {address}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
