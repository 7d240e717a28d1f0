//! PawConnect Server
//!
//! Run with: cargo run --bin pawconnect-server
//!
//! Serves the built UI from `server.static_dir` and the dataset under
//! `/api/v1`. Configuration is read from the first `config.toml` found in
//! the usual locations, then overridden by `PAWCONNECT_*` environment
//! variables. `RUST_LOG` takes precedence over `logging.level`.

use pawconnect::api::{serve, AppState};
use pawconnect::config::{Config, LoggingConfig};
use pawconnect::dataset::Dataset;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting PawConnect server v{}", env!("CARGO_PKG_VERSION"));

    let dataset = Dataset::load_or_bundled(config.dataset.path())?;
    match config.dataset.path() {
        Some(path) => tracing::info!("Dataset loaded from {:?}", path),
        None => tracing::info!("Using bundled dataset"),
    }

    let summary = dataset.summary();
    tracing::info!(
        providers = summary.providers,
        articles = summary.articles,
        users = summary.users,
        "Dataset ready"
    );

    for issue in dataset.validate() {
        tracing::warn!("Dataset problem: {}", issue);
    }

    tracing::info!("Static files: {}", config.server.static_dir);

    let state = AppState::new(dataset, config.server);
    serve(state).await?;

    tracing::info!("PawConnect server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}
