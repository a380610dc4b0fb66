//! Core domain entities.
//!
//! Entities are plain data structures. Records are created from a separate
//! input type ([`NewLink`]) that carries only what the caller provides.

pub mod link;

pub use link::{Link, NewLink};
