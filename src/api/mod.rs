//! PawConnect HTTP Server
//!
//! Serves the built frontend and a read-only JSON view of the dataset,
//! built with Axum.
//!
//! # Endpoints
//!
//! ## Dataset
//! - `GET /api/v1/dataset` - Full dataset
//! - `GET /api/v1/cities` - City profiles
//! - `GET /api/v1/cities/:city` - One city profile
//!
//! ## Directory
//! - `GET /api/v1/directory` - Filtered, sorted, paged providers
//! - `GET /api/v1/categories` - Provider categories
//!
//! ## Info Hub
//! - `GET /api/v1/articles` - Article search
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! Every other path is answered from `static_dir`, falling back to
//! `index.html` so client-side routes survive a reload.
//!
//! # Example
//!
//! ```rust,ignore
//! use pawconnect::api::{serve, AppState};
//! use pawconnect::config::ServerConfig;
//! use pawconnect::dataset::Dataset;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(Dataset::bundled()?, ServerConfig::default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/dataset", get(routes::dataset::get_dataset))
        .route("/cities", get(routes::dataset::list_cities))
        .route("/cities/:city", get(routes::dataset::get_city))
        .route("/directory", get(routes::directory::search_directory))
        .route("/categories", get(routes::directory::list_categories))
        .route("/articles", get(routes::articles::list_articles));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let static_dir = Path::new(&state.config.static_dir);
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));
    let cors = cors_layer(&state.config.cors_origins);

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Restrict CORS to the configured origins; none configured means any
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(allowed)
    }
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state
        .config
        .socket_addr()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("PawConnect listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("PawConnect shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
