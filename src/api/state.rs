//! Application State
//!
//! Shared state accessible by all API handlers. The dataset never changes
//! after start-up, so handlers only ever read through the `Arc`.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::dataset::Dataset;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The mock data served by every endpoint
    pub dataset: Arc<Dataset>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Integrity problems found when the dataset was loaded
    pub dataset_issues: usize,
}

impl AppState {
    pub fn new(dataset: Dataset, config: ServerConfig) -> Self {
        let dataset_issues = dataset.validate().len();
        Self {
            dataset: Arc::new(dataset),
            config: Arc::new(config),
            start_time: Instant::now(),
            dataset_issues,
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
