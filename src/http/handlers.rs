//! HTTP request handlers for the heroes API
//!
//! Implements the welcome, health, list, search and fallback
//! endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::core::error::HeroesError;
use crate::core::services::Services;
use crate::core::types::*;

/// Plain-text body served at `/`
pub const WELCOME_MESSAGE: &str = "Welcome to our Boruto API";

/// Plain-text body for unmatched routes
pub const PAGE_NOT_FOUND: &str = "Page not Found.";

/// Root handler
pub async fn root_handler() -> &'static str {
    WELCOME_MESSAGE
}

/// Health check handler
///
/// Returns server status, version and catalogue size.
pub async fn health_handler(State(services): State<Arc<Services>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        heroes: services.catalogue.len(),
        pages: services.catalogue.last_page(),
    })
}

/// List heroes handler
///
/// Serves one catalogue page. The `page` query parameter is optional
/// and defaults to the first page; only its first occurrence counts.
///
/// # Errors
///
/// - `InvalidInput` (400): `page` is not an integer
/// - `NotFound` (404): `page` is outside the catalogue
pub async fn list_heroes_handler(
    State(services): State<Arc<Services>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ApiResponse>, HeroesError> {
    let params = ListParams::from_pairs(&pairs);
    let page = PageParam::from_raw(params.page.as_deref());
    let response = services.query.list(page)?;

    Ok(Json(ApiResponse::from(response)))
}

/// Search heroes handler
///
/// Matches the first `name` against hero names. Never fails; no
/// match and a missing name both give an empty list.
pub async fn search_heroes_handler(
    State(services): State<Arc<Services>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ApiResponse> {
    let params = SearchParams::from_pairs(&pairs);
    let response = services.query.search(params.name.as_deref());

    Json(ApiResponse::from(response))
}

/// Fallback for unmatched routes
pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, PAGE_NOT_FOUND)
}
