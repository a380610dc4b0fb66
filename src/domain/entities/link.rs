//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link with its click counter.
///
/// `code` is derived from the sequence number issued at creation time and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, original_url: String, clicks: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            original_url,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}

impl NewLink {
    /// Turns the input into a stored record with zero clicks.
    pub fn into_link(self, created_at: DateTime<Utc>) -> Link {
        Link::new(self.code, self.original_url, 0, created_at)
    }
}
