//! HTTP mapping for heroes API errors
//!
//! Converts `HeroesError` into a status code and the standard
//! failure envelope so handlers can return `Result` directly.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::HeroesError;
use crate::core::types::ApiResponse;

/// Convert error to appropriate HTTP status code
pub fn status_code(err: &HeroesError) -> StatusCode {
    if err.is_bad_request() {
        StatusCode::BAD_REQUEST
    } else if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for HeroesError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        let body = Json(ApiResponse::failure(self.message()));

        (status, body).into_response()
    }
}
