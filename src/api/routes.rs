//! API route configuration.

use crate::api::handlers::{decode_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`        - Create a short link
/// - `GET    /stats/{code}`   - Link metadata and click count
/// - `GET    /decode/{code}`  - Sequence number behind a short code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/decode/{code}", get(decode_handler))
}
