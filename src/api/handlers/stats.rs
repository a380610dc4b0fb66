//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves metadata and the click count of a short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Reading stats does not count as a click.
///
/// # Response
///
/// ```json
/// {
///   "code": "1B",
///   "long_url": "https://example.com",
///   "clicks": 3,
///   "created_at": "2025-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(StatsResponse::from(link)))
}
