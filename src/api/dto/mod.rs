//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod decode;
pub mod health;
pub mod shorten;
pub mod stats;
