//! Domain layer containing business entities and the shortening core.
//!
//! # Architecture
//!
//! - [`entities`] - Link records
//! - [`repositories`] - Counter and link store trait definitions
//! - [`sequence`] - Sequence allocation on top of a counter store
//! - [`errors`] - Error taxonomy shared by the core and its stores
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Store traits define contracts implemented by the infrastructure layer
//! - Short code encoding is pure and lives in [`crate::utils::code_encoder`]
//!
//! # Creation Flow
//!
//! 1. [`sequence::SequenceAllocator`] takes the next value from the counter
//! 2. [`crate::utils::code_encoder::CodeEncoder`] turns it into a short code
//! 3. The record is inserted through [`repositories::LinkStore`]

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod sequence;
