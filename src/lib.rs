//! # chainbook — a client-side hash-chained ledger
//!
//! A minimal educational blockchain: a linear sequence of blocks, each bound
//! to its predecessor by a SHA-256 digest, with an append-only action log of
//! user operations. Chain and log are persisted through a session-scoped
//! key-value store on every mutation, and rehydrated from it at startup.
//!
//! - **ledger**: block structure, action log, and the owning `ChainStore`
//! - **hash**: block digest computation
//! - **storage**: the session-store seam and an in-memory implementation
//!
//! Single-writer by design: every operation runs to completion on the calling
//! thread. Sharing a `ChainStore` between real concurrent writers would need
//! a mutex around the read-head / hash / mutate / persist sequence.
//!
//! ## Quick Start
//!
//! ```rust
//! use chainbook::ledger::ChainStore;
//! use chainbook::storage::MemoryStore;
//!
//! let mut store = ChainStore::new(Box::new(MemoryStore::new()));
//! store.new_block("hello");
//! assert_eq!(store.chain().len(), 2);
//! ```

pub mod core;
pub mod hash;
pub mod ledger;
pub mod logging;
pub mod storage;

pub use crate::core::error::{Error, Result};
