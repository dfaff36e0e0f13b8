//! The ledger: blocks, action log, and the owning chain store.
//!
//! - Hash-linked block sequence with a sentinel genesis block
//! - Append-only action log of mutating operations
//! - `ChainStore` enforcing the append-or-amend-last mutation rule

pub mod block;
pub mod config;
pub mod log;
pub mod store;

pub use block::{Block, GENESIS_HASH, GENESIS_PREVIOUS_HASH};
pub use config::StoreConfig;
pub use log::{Action, LogEntry};
pub use store::{ChainStore, ChainVerification, Snapshot};
