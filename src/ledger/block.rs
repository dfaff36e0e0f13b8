//! Block structure and genesis sentinels.

use serde::{Deserialize, Serialize};

use crate::core::{now, Timestamp};
use crate::hash;

/// Sentinel parent link of the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "000000000";

/// Sentinel hash of the genesis block.
///
/// A fixed literal, not a digest: shorter than real SHA-256 output and never
/// produced by the hash engine. Kept verbatim for compatibility with
/// previously persisted chains.
pub const GENESIS_HASH: &str = "034DFA357";

/// One ledger entry: payload plus the link to its predecessor's digest.
///
/// Serialized with camelCase field names to match the persisted wire format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Creation (or last amendment) time, epoch milliseconds
    pub timestamp: Timestamp,
    /// Payload data
    pub data: String,
    /// Hash of the preceding block
    pub previous_hash: String,
    /// Digest binding timestamp, data and parent link
    pub hash: String,
}

impl Block {
    /// Build a block carrying `data`, linked to `previous_hash` and hashed
    /// over its contents at the current time.
    pub fn new(data: &str, previous_hash: &str) -> Self {
        let timestamp = now();
        let hash = hash::compute_hash(timestamp, data, previous_hash);
        Self {
            timestamp,
            data: data.to_string(),
            previous_hash: previous_hash.to_string(),
            hash,
        }
    }

    /// Create a genesis block: current timestamp, empty data, sentinel hashes.
    pub fn genesis() -> Self {
        Self {
            timestamp: now(),
            data: String::new(),
            previous_hash: GENESIS_PREVIOUS_HASH.to_string(),
            hash: GENESIS_HASH.to_string(),
        }
    }

    /// Whether this block carries the genesis sentinels.
    pub fn is_genesis(&self) -> bool {
        self.previous_hash == GENESIS_PREVIOUS_HASH && self.hash == GENESIS_HASH
    }

    /// Overwrite the payload in place, refreshing timestamp and hash.
    /// The parent link is left untouched.
    pub fn amend(&mut self, data: &str) {
        self.data = data.to_string();
        self.timestamp = now();
        self.hash = hash::compute_hash(self.timestamp, &self.data, &self.previous_hash);
    }

    /// Recompute the digest from current contents without storing it.
    pub fn computed_hash(&self) -> String {
        hash::compute_hash(self.timestamp, &self.data, &self.previous_hash)
    }

    /// Whether this block's parent link matches `parent`'s hash.
    pub fn links_to(&self, parent: &Block) -> bool {
        self.previous_hash == parent.hash
    }
}
