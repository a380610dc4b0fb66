//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "code": "1B",
///   "short_url": "http://localhost:3000/1B",
///   "long_url": "https://example.com/some/long/path"
/// }
/// ```
///
/// Every call allocates a new code, even for a URL that was shortened before.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or malformed.
/// Returns 503 Service Unavailable if no sequence number could be allocated.
/// Returns 500 Internal Server Error if the link could not be stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.create_short_link(payload.url).await?;
    let short_url = state.link_service.short_url(&link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: link.code,
            short_url,
            long_url: link.original_url,
        }),
    ))
}
