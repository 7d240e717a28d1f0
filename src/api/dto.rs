//! Data Transfer Objects
//!
//! Query parameters and response bodies for the API endpoints.

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::city::City;
use crate::dataset::{Article, CityProfile, ServiceCategory};

// ============================================
// DIRECTORY DTOs
// ============================================

/// `GET /api/v1/directory` query string
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryParams {
    /// Free text matched against name and description
    #[serde(default)]
    pub q: String,
    /// Comma separated category ids
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// listing, rating, name or recent
    #[serde(default)]
    pub sort: Option<String>,
    /// 1-based page number
    #[serde(default)]
    pub page: Option<usize>,
}

/// Category list response
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub total: usize,
    pub categories: Vec<ServiceCategory>,
}

// ============================================
// ARTICLE DTOs
// ============================================

/// `GET /api/v1/articles` query string
#[derive(Debug, Default, Deserialize)]
pub struct ArticleParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Article search response
#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub total: usize,
    /// Categories available for the city, for the filter chips
    pub categories: Vec<String>,
    pub articles: Vec<Article>,
}

// ============================================
// CITY DTOs
// ============================================

/// City list response
#[derive(Debug, Serialize)]
pub struct CityListResponse {
    pub total: usize,
    pub cities: Vec<CityProfile>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// "ok", or "issues" when validation found problems
    pub dataset: String,
    pub providers: usize,
    pub articles: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

/// Parse an optional `city` parameter; blank means "any city"
pub fn parse_city_param(raw: Option<&str>) -> ApiResult<Option<City>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<City>()
            .map(Some)
            .map_err(|e| ApiError::Validation(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city_param() {
        assert_eq!(parse_city_param(None).unwrap(), None);
        assert_eq!(parse_city_param(Some(" ")).unwrap(), None);
        assert_eq!(
            parse_city_param(Some("Calgary")).unwrap(),
            Some(City::Calgary)
        );
        assert!(matches!(
            parse_city_param(Some("oslo")),
            Err(ApiError::Validation(_))
        ));
    }
}
