//! Infrastructure layer for external integrations.
//!
//! This layer implements the store traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - In-process stores (tests, single-process demos)
//! - [`persistence`] - PostgreSQL and Redis stores

pub mod memory;
pub mod persistence;
