//! Link creation and resolution service.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::{ShortenerError, StoreError};
use crate::domain::repositories::{LinkStore, with_deadline};
use crate::domain::sequence::{DEFAULT_TIMEOUT, SequenceAllocator};
use crate::utils::code_encoder::CodeEncoder;
use crate::utils::target_url::check_target_url;

/// Base URL used by [`LinkService::short_url`] unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Reachability of the two storage collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreHealth {
    pub counter_store: bool,
    pub link_store: bool,
}

impl StoreHealth {
    pub fn is_healthy(&self) -> bool {
        self.counter_store && self.link_store
    }
}

/// Service for creating and resolving shortened links.
///
/// Short codes come from the sequence allocator through the code encoder, so
/// they are unique without any collision check against the link store.
pub struct LinkService {
    allocator: SequenceAllocator,
    link_store: Arc<dyn LinkStore>,
    encoder: CodeEncoder,
    base_url: String,
    store_timeout: Duration,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        allocator: SequenceAllocator,
        link_store: Arc<dyn LinkStore>,
        encoder: CodeEncoder,
    ) -> Self {
        Self {
            allocator,
            link_store,
            encoder,
            base_url: DEFAULT_BASE_URL.to_string(),
            store_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the public base URL short codes are appended to.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the upper bound for each link store round-trip.
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub fn encoder(&self) -> &CodeEncoder {
        &self.encoder
    }

    pub fn allocator(&self) -> &SequenceAllocator {
        &self.allocator
    }

    /// Creates a short link for `original_url`.
    ///
    /// # Flow
    ///
    /// 1. Reject empty input and anything that is not a plain `http`/`https` URL
    /// 2. Allocate the next sequence number
    /// 3. Encode it as the short code
    /// 4. Insert the record
    ///
    /// A sequence number taken in step 2 is never returned to the counter; if
    /// step 4 fails the number is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::InvalidInput`] for empty input, other schemes,
    /// or unencoded whitespace, control, or non-ASCII characters.
    /// Returns [`ShortenerError::SequenceAllocation`] if no number could be allocated.
    /// Returns [`ShortenerError::Persistence`] if the insert fails.
    pub async fn create_short_link(&self, original_url: String) -> Result<Link, ShortenerError> {
        if original_url.trim().is_empty() {
            return Err(ShortenerError::InvalidInput(
                "URL cannot be empty".to_string(),
            ));
        }
        check_target_url(&original_url)
            .map_err(|e| ShortenerError::InvalidInput(e.to_string()))?;

        let sequence = self.allocator.next_sequence().await?;
        let code = self.encoder.encode(sequence);

        let new_link = NewLink {
            code: code.clone(),
            original_url,
        };

        match with_deadline(self.store_timeout, self.link_store.insert(new_link)).await {
            Ok(link) => {
                info!(code = %link.code, sequence, "Created short link");
                metrics::counter!("links_created_total").increment(1);
                Ok(link)
            }
            Err(StoreError::DuplicateKey(key)) => {
                error!(
                    code = %code,
                    sequence,
                    namespace = self.allocator.namespace(),
                    "Allocated code already exists; the sequence counter is behind the stored links"
                );
                Err(ShortenerError::Persistence(format!("duplicate key: {key}")))
            }
            Err(e) => {
                warn!(code = %code, sequence, error = %e, "Insert failed, sequence number skipped");
                Err(ShortenerError::Persistence(e.to_string()))
            }
        }
    }

    /// Resolves a short code to its original URL and counts the click.
    ///
    /// The click increment is best-effort: if it fails the failure is logged and
    /// the URL is still returned.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if no link has this code.
    /// Returns [`ShortenerError::AmbiguousRecord`] if several links have it.
    /// Returns [`ShortenerError::Persistence`] if the lookup fails.
    pub async fn resolve(&self, code: &str) -> Result<String, ShortenerError> {
        let link = self.get_link(code).await?;

        match with_deadline(self.store_timeout, self.link_store.increment_clicks(code)).await {
            Ok(clicks) => debug!(code, clicks, "Resolved short link"),
            Err(e) => {
                metrics::counter!("click_increment_failures_total").increment(1);
                warn!(code, error = %e, "Failed to record click");
            }
        }
        metrics::counter!("links_resolved_total").increment(1);

        Ok(link.original_url)
    }

    /// Returns the click count of a short link.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_link`].
    pub async fn get_clicks(&self, code: &str) -> Result<i64, ShortenerError> {
        Ok(self.get_link(code).await?.clicks)
    }

    /// Retrieves a link by its short code without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if no link has this code.
    /// Returns [`ShortenerError::AmbiguousRecord`] if several links have it.
    /// Returns [`ShortenerError::Persistence`] if the lookup fails.
    pub async fn get_link(&self, code: &str) -> Result<Link, ShortenerError> {
        match with_deadline(self.store_timeout, self.link_store.find_by_code(code)).await {
            Ok(Some(link)) => Ok(link),
            Ok(None) => Err(ShortenerError::NotFound(code.to_string())),
            Err(StoreError::Ambiguous { code, matches }) => {
                error!(code = %code, matches, "Data integrity violation: short code is not unique");
                Err(ShortenerError::AmbiguousRecord { code, matches })
            }
            Err(e) => Err(ShortenerError::Persistence(e.to_string())),
        }
    }

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::Persistence`] if the store cannot be read.
    pub async fn count_links(&self) -> Result<i64, ShortenerError> {
        with_deadline(self.store_timeout, self.link_store.count())
            .await
            .map_err(|e| ShortenerError::Persistence(e.to_string()))
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Checks both storage collaborators.
    pub async fn health(&self) -> StoreHealth {
        StoreHealth {
            counter_store: self.allocator.health_check().await,
            link_store: self.link_store.health_check().await,
        }
    }
}
