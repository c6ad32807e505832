//! Handler for unknown routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers every unmatched path with the JSON error body.
///
/// # Response Codes
///
/// - **404 Not Found**: `{"error": {"code": "not_found", ...}}`
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
