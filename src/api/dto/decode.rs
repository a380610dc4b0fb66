//! DTOs for the code inspection endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    pub code: String,
    pub sequence: u64,
}
