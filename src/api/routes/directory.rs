//! Directory Routes
//!
//! - GET /api/v1/directory - Filtered, sorted, paged providers
//! - GET /api/v1/categories - Provider categories

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{parse_city_param, CategoryListResponse, DirectoryParams};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::ServiceProvider;
use crate::directory::{parse_category_list, DirectoryQuery, Page, SortOrder};

/// GET /api/v1/directory
///
/// `?q=vet&category=2,5&city=dublin&sort=rating&page=1`
pub async fn search_directory(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DirectoryParams>,
) -> ApiResult<Json<Page<ServiceProvider>>> {
    let query = build_query(params)?;
    Ok(Json(query.run(&state.dataset.providers)))
}

/// GET /api/v1/categories
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        total: state.dataset.categories.len(),
        categories: state.dataset.categories.clone(),
    })
}

fn build_query(params: DirectoryParams) -> ApiResult<DirectoryQuery> {
    let city = parse_city_param(params.city.as_deref())?;
    let sort = match params.sort.as_deref() {
        Some(raw) => raw.parse::<SortOrder>().map_err(ApiError::Validation)?,
        None => SortOrder::default(),
    };
    let categories = params
        .category
        .as_deref()
        .map(parse_category_list)
        .unwrap_or_default();

    Ok(DirectoryQuery::new()
        .query(params.q)
        .categories(categories)
        .city(city)
        .sort(sort)
        .page(params.page.unwrap_or(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;

    #[test]
    fn test_build_query() {
        let query = build_query(DirectoryParams {
            q: "vet".into(),
            category: Some("2, 5".into()),
            city: Some("dublin".into()),
            sort: Some("rating".into()),
            page: Some(2),
        })
        .unwrap();

        assert_eq!(query.filter.query, "vet");
        assert_eq!(query.filter.categories.len(), 2);
        assert_eq!(query.filter.city, Some(City::Dublin));
        assert_eq!(query.sort, SortOrder::Rating);
        assert_eq!(query.page, 2);
    }

    #[test]
    fn test_build_query_defaults() {
        let query = build_query(DirectoryParams::default()).unwrap();
        assert_eq!(query, DirectoryQuery::new());
    }

    #[test]
    fn test_build_query_rejects_unknown_sort() {
        let err = build_query(DirectoryParams {
            sort: Some("price".into()),
            ..DirectoryParams::default()
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
