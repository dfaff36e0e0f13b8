//! Session-scoped persistence.
//!
//! The ledger treats storage as an opaque key-value surface:
//! - `SessionStore` trait at the persistence seam
//! - an in-memory implementation with an optional write quota

pub mod gateway;
pub mod memory;

pub use gateway::{
    SessionStore, ACTION_LOG_KEY, CHAIN_KEY, CHECKPOINT_KEY, STARTUP_SNAPSHOT_KEY,
};
pub use memory::MemoryStore;
