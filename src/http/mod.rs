//! HTTP REST adapter
//!
//! Depends only on core/. Provides the heroes endpoints, request
//! logging, response headers and optional static images via the
//! Axum web framework.

pub mod error;
pub mod handlers;
pub mod middleware;

pub use handlers::*;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::core::error::{HeroesError, Result};
use crate::core::services::Services;

/// Cache-Control value attached to every response
pub fn cache_control_value(max_age_secs: u64) -> Result<HeaderValue> {
    HeaderValue::from_str(&format!("public, max-age={max_age_secs}, immutable"))
        .map_err(|e| HeroesError::ConfigError(format!("Invalid Cache-Control value: {e}")))
}

/// Build the API router around shared services
///
/// Routes:
/// - `GET /` welcome text
/// - `GET /health`
/// - `GET /boruto/heroes?page=N`
/// - `GET /boruto/heroes/search?name=...`
/// - `GET /images/*` when an images directory is configured
///
/// Anything else falls through to a plain-text 404.
pub fn router(services: Arc<Services>) -> Result<Router> {
    let http_config = services.config.http.clone();

    let mut app = Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .route("/boruto/heroes", get(handlers::list_heroes_handler))
        .route("/boruto/heroes/search", get(handlers::search_heroes_handler))
        .fallback(handlers::not_found_handler);

    if let Some(images_dir) = &http_config.images_dir {
        app = app.nest_service("/images", ServeDir::new(images_dir));
    }

    // Add middleware
    app = app
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            cache_control_value(http_config.cache_max_age_secs)?,
        ))
        .layer(axum_middleware::from_fn(middleware::log_request));

    if http_config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    Ok(app.with_state(services))
}
