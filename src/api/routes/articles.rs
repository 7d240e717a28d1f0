//! Article Routes
//!
//! - GET /api/v1/articles - Info hub search

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{parse_city_param, ArticleListResponse, ArticleParams};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::infohub::{categories, ArticleFilter};

/// GET /api/v1/articles
///
/// `?q=winter&category=Health&city=calgary`
pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ArticleParams>,
) -> ApiResult<Json<ArticleListResponse>> {
    let city = parse_city_param(params.city.as_deref())?;
    let filter = ArticleFilter {
        query: params.q,
        category: params.category.filter(|c| !c.trim().is_empty()),
        city,
    };

    let in_city: Vec<_> = state
        .dataset
        .articles
        .iter()
        .filter(|a| city.map_or(true, |c| a.city == c))
        .cloned()
        .collect();

    let articles: Vec<_> = filter.apply(&in_city).into_iter().cloned().collect();

    Ok(Json(ArticleListResponse {
        total: articles.len(),
        categories: categories(&in_city),
        articles,
    }))
}
