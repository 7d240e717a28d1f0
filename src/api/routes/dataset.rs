//! Dataset Routes
//!
//! - GET /api/v1/dataset - Everything, as the UI consumes it
//! - GET /api/v1/cities - City profiles
//! - GET /api/v1/cities/:city - One city profile

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{parse_city_param, CityListResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::{CityProfile, Dataset};

/// GET /api/v1/dataset
pub async fn get_dataset(State(state): State<Arc<AppState>>) -> Json<Dataset> {
    Json(state.dataset.as_ref().clone())
}

/// GET /api/v1/cities
pub async fn list_cities(State(state): State<Arc<AppState>>) -> Json<CityListResponse> {
    Json(CityListResponse {
        total: state.dataset.cities.len(),
        cities: state.dataset.cities.clone(),
    })
}

/// GET /api/v1/cities/:city
pub async fn get_city(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> ApiResult<Json<CityProfile>> {
    let city = parse_city_param(Some(&city))?
        .ok_or_else(|| ApiError::Validation("City is required".to_string()))?;

    let profile = state
        .dataset
        .city_profile(city)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("No profile for {}", city)))?;

    Ok(Json(profile))
}
