//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Metadata and click count of a short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            long_url: link.original_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}
