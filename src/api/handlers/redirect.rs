//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the link by code
/// 2. Count the click (a failed count is logged and does not block the redirect)
/// 3. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist, including codes
/// that no sequence number could have produced.
/// Returns 409 Conflict if the code matches more than one stored link.
/// Returns 500 Internal Server Error if the stored URL is not a valid
/// `Location` header value.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&code).await?;

    let location = HeaderValue::from_str(&long_url).map_err(|e| {
        tracing::error!(code = %code, "Stored URL is not a valid Location header: {e}");
        AppError::internal("Stored URL cannot be redirected to", json!({ "code": code }))
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
