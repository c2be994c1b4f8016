use axum::{
    extract::{OriginalUri, Path, Query, State},
    routing::get,
    Json, Router,
};
use vitrine_core::search::SearchParams;
use vitrine_core::SearchQuery;

use crate::dto::{ProductDetailsResponse, SearchResponse};
use crate::error::{ApiError, AppError};
use crate::state::AppState;

pub const HEALTH_MESSAGE: &str = "Product API is running";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products/health", get(health))
        .route("/products/search", get(search_products))
        .route("/products/{id}", get(get_product))
}

/// GET /api/v1/products/{id}
/// Product page: the listing plus seller, reviews, questions, shipping and related items
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<ProductDetailsResponse>, ApiError> {
    tracing::info!(product_id = %id, "Product details requested");

    let details = state
        .aggregator
        .get_product_details(&id)
        .await
        .map_err(|e| AppError::from(e).at(uri.path()))?;

    Ok(Json(details.into()))
}

/// GET /api/v1/products/search?q=&limit=&offset=
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = SearchQuery::try_from(params).map_err(|e| AppError::from(e).at(uri.path()))?;

    let page = state
        .search
        .search(&query)
        .await
        .map_err(|e| AppError::from(e).at(uri.path()))?;

    Ok(Json(SearchResponse::from_page(page, &state.shipping)))
}

/// GET /health, GET /api/v1/products/health
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}
