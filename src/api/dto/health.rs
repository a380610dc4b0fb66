//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each storage collaborator.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub counter_store: CheckStatus,
    pub link_store: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn from_check(healthy: bool, failure: &str) -> Self {
        if healthy {
            Self {
                status: "ok".to_string(),
                message: None,
            }
        } else {
            Self {
                status: "error".to_string(),
                message: Some(failure.to_string()),
            }
        }
    }
}
