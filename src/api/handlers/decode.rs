//! Handler for short code inspection.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::decode::DecodeResponse;
use crate::domain::errors::ShortenerError;
use crate::error::AppError;
use crate::state::AppState;

/// Decodes a short code back into its sequence number.
///
/// # Endpoint
///
/// `GET /api/decode/{code}`
///
/// Pure computation; the link store is not consulted, so a well-formed code
/// that was never issued still decodes.
///
/// # Errors
///
/// Returns 400 Bad Request if the code contains characters outside the
/// alphabet, has a leading zero digit, or overflows 64 bits.
pub async fn decode_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DecodeResponse>, AppError> {
    let sequence = state
        .link_service
        .encoder()
        .decode(&code)
        .map_err(ShortenerError::from)?;

    Ok(Json(DecodeResponse { code, sequence }))
}
