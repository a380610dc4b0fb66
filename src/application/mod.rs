//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the sequence
//! allocator, the code encoder and the link store. Services provide a clean
//! API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, resolution and click counts

pub mod services;
