//! In-process store implementations.
//!
//! Backed by `DashMap`. Used by unit and handler tests, and by
//! `STORAGE_BACKEND=memory` for running without a database.

mod memory_counter_store;
mod memory_link_store;

pub use memory_counter_store::MemoryCounterStore;
pub use memory_link_store::MemoryLinkStore;
