//! Utility functions shared across layers.
//!
//! - [`code_encoder`] - Bijective sequence number ↔ short code conversion
//! - [`target_url`] - Redirect target checks

pub mod code_encoder;
pub mod target_url;
