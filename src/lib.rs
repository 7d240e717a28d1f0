//! # PawConnect
//!
//! City-aware pet community demo. This crate holds everything that is not
//! rendering: the selected-city state and its theme tokens, the read-only
//! mock dataset, the directory and info hub pipelines, profile lookups,
//! landing content, the forms with their validation rules and the feature
//! voting board.
//!
//! The core compiles for both native targets and `wasm32`; the Leptos
//! frontend in `pawconnect-ui/` depends on it with `default-features = false`.
//! The `server` feature (on by default) adds the configuration loader, the
//! Axum dev server and the CLI.
//!
//! ## Modules
//!
//! - [`city`]: city enum and persisted selection
//! - [`theme`]: city-keyed palette and class tokens
//! - [`dataset`]: dataset model, loading and integrity checks
//! - [`directory`]: filter, sort and paginate service providers
//! - [`infohub`]: article filtering and card helpers
//! - [`profile`]: current user, pets and the session pet roster
//! - [`forms`]: feedback and add-pet forms
//! - [`voting`]: feature voting board
//! - [`landing`]: testimonials, stats and hero content
//!
//! ## Quick Start
//!
//! ```rust
//! use pawconnect::city::City;
//! use pawconnect::dataset::Dataset;
//! use pawconnect::directory::{DirectoryQuery, SortOrder};
//!
//! let dataset = Dataset::bundled().expect("bundled dataset parses");
//! let page = DirectoryQuery::new()
//!     .city(Some(City::Dublin))
//!     .sort(SortOrder::Rating)
//!     .run(&dataset.providers);
//!
//! assert!(page.items.iter().all(|p| p.city == City::Dublin));
//! ```

pub mod city;
pub mod dataset;
pub mod directory;
pub mod forms;
pub mod infohub;
pub mod landing;
pub mod profile;
pub mod theme;
pub mod voting;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

pub use city::{City, CitySelection, MemoryStore, SelectionStore, CITY_STORAGE_KEY};
pub use dataset::{Dataset, DatasetError, DatasetIssue};
pub use directory::{DirectoryFilter, DirectoryQuery, Page, SortOrder, PAGE_SIZE};
pub use forms::{FeedbackForm, NewPetForm, ValidationErrors};
pub use infohub::ArticleFilter;
pub use theme::{Palette, Theme};
pub use voting::{FeatureBoard, VoteError};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};
#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
