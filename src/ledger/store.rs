//! Chain store: owns the block sequence and action log, drives persistence.
//!
//! Mutation rule: append a new block, or amend the last block only — the
//! genesis block is never amended. Every mutation is audited in the action
//! log and written through the session store.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{Error, Result};
use crate::ledger::block::Block;
use crate::ledger::config::StoreConfig;
use crate::ledger::log::{Action, LogEntry};
use crate::storage::gateway::{
    SessionStore, ACTION_LOG_KEY, CHAIN_KEY, CHECKPOINT_KEY, STARTUP_SNAPSHOT_KEY,
};

/// Combined chain + log serialization unit, used by startup rehydration and
/// the explicit checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The block sequence
    pub blockchain: Vec<Block>,
    /// The action log
    pub action_log: Vec<LogEntry>,
}

/// Result of a full-chain integrity check.
#[derive(Clone, Debug)]
pub struct ChainVerification {
    /// Whether every block passed
    pub valid: bool,
    /// Number of blocks checked before stopping
    pub blocks_checked: usize,
    /// Index of the first invalid block, if any
    pub first_invalid_index: Option<usize>,
}

/// Owns the chain and the action log for the lifetime of a session.
///
/// Constructed with an injected [`SessionStore`]; there are no ambient
/// singletons. The chain always contains at least the genesis block.
pub struct ChainStore {
    chain: Vec<Block>,
    action_log: Vec<LogEntry>,
    gateway: Box<dyn SessionStore>,
    config: StoreConfig,
}

impl ChainStore {
    /// Create a store with default configuration, rehydrating from the
    /// startup snapshot if one is present and valid.
    pub fn new(gateway: Box<dyn SessionStore>) -> Self {
        Self::with_config(gateway, StoreConfig::default())
    }

    /// Create a store with explicit configuration.
    ///
    /// A missing snapshot starts a fresh single-genesis chain; a corrupt one
    /// (parse failure or failed validation) does the same after a warning.
    pub fn with_config(gateway: Box<dyn SessionStore>, config: StoreConfig) -> Self {
        let mut store = Self {
            chain: Vec::new(),
            action_log: Vec::new(),
            gateway,
            config,
        };
        if store.config.rehydrate {
            match store.rehydrate() {
                Ok(true) => info!(
                    blocks = store.chain.len(),
                    "rehydrated ledger from session store"
                ),
                Ok(false) => {}
                Err(err) => warn!(%err, "discarding persisted ledger, starting fresh"),
            }
        }
        if store.chain.is_empty() {
            store.chain.push(Block::genesis());
        }
        store
    }

    /// Restore chain and log from the startup snapshot.
    ///
    /// `Ok(false)` means no snapshot was present.
    fn rehydrate(&mut self) -> Result<bool> {
        let raw = match self.gateway.get(STARTUP_SNAPSHOT_KEY) {
            Some(raw) => raw,
            None => return Ok(false),
        };
        let snapshot: Snapshot = serde_json::from_str(&raw)
            .map_err(|err| Error::PersistenceCorrupt(err.to_string()))?;
        Self::validate(&snapshot.blockchain, self.config.verify_hashes_on_load)?;
        self.chain = snapshot.blockchain;
        self.action_log = snapshot.action_log;
        Ok(true)
    }

    /// Validate a candidate chain: genesis sentinels, parent links, and
    /// (optionally) stored digests.
    fn validate(chain: &[Block], verify_hashes: bool) -> Result<()> {
        let genesis = chain
            .first()
            .ok_or_else(|| Error::PersistenceCorrupt("empty chain".into()))?;
        if !genesis.is_genesis() {
            return Err(Error::PersistenceCorrupt(
                "first block does not carry the genesis sentinels".into(),
            ));
        }
        for (i, pair) in chain.windows(2).enumerate() {
            let (parent, block) = (&pair[0], &pair[1]);
            if !block.links_to(parent) {
                return Err(Error::PersistenceCorrupt(format!(
                    "broken parent link at index {}",
                    i + 1
                )));
            }
            if verify_hashes && block.hash != block.computed_hash() {
                return Err(Error::PersistenceCorrupt(format!(
                    "stored hash mismatch at index {}",
                    i + 1
                )));
            }
        }
        Ok(())
    }

    /// The block sequence, genesis first.
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// The action log, oldest entry first.
    pub fn action_log(&self) -> &[LogEntry] {
        &self.action_log
    }

    /// Read access to the underlying session store.
    pub fn gateway(&self) -> &dyn SessionStore {
        self.gateway.as_ref()
    }

    /// The last block of the chain.
    pub fn latest_block(&self) -> &Block {
        // Non-empty by construction; an empty chain is a programming error.
        self.chain
            .last()
            .expect("chain always contains the genesis block")
    }

    /// Append a block carrying `data`, linked to the current head.
    ///
    /// Audited as an `addBlock` entry; the chain is persisted afterwards.
    pub fn new_block(&mut self, data: &str) -> &Block {
        let block = Block::new(data, &self.latest_block().hash);
        info!(hash = %block.hash, "user added a new block");
        self.chain.push(block.clone());
        self.log_action(Action::AddBlock { block });
        self.persist_chain();
        self.latest_block()
    }

    /// Amend the last block's payload in place, refreshing its timestamp and
    /// recomputing its hash against the unchanged parent link.
    ///
    /// The genesis block is never amended: while the chain holds only the
    /// genesis block this is a no-op — an informational notice, no mutation,
    /// no log entry, no persistence write. Returns whether a block was
    /// amended.
    pub fn update_data(&mut self, data: &str) -> bool {
        let last = self.chain.len() - 1;
        if last == 0 {
            info!("refusing to amend the genesis block");
            return false;
        }
        self.chain[last].amend(data);
        let amended = self.chain[last].clone();
        info!(hash = %amended.hash, "user amended the last block");
        self.log_action(Action::UpdateBlock { block: amended });
        self.persist_chain();
        true
    }

    /// Discard every block and start over from a fresh genesis block.
    ///
    /// Audited as a `resetBlockchain` entry with no block payload.
    pub fn reset_blockchain(&mut self) {
        self.chain = vec![Block::genesis()];
        info!("user reset the blockchain");
        self.log_action(Action::ResetBlockchain);
        self.persist_chain();
    }

    /// Append an action record and persist the log.
    pub fn log_action(&mut self, action: Action) {
        self.action_log.push(LogEntry::new(action));
        self.persist_log();
    }

    /// Explicit checkpoint: write chain plus log under the dedicated
    /// checkpoint key, independent of the per-field persistence writes.
    pub fn save_checkpoint(&mut self) {
        let snapshot = Snapshot {
            blockchain: self.chain.clone(),
            action_log: self.action_log.clone(),
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => self.write(CHECKPOINT_KEY, &json),
            Err(err) => warn!(%err, "failed to serialize checkpoint"),
        }
    }

    /// Check genesis sentinels, parent links and stored digests over the
    /// whole chain.
    pub fn verify_chain(&self) -> ChainVerification {
        let mut verification = ChainVerification {
            valid: true,
            blocks_checked: 0,
            first_invalid_index: None,
        };

        for (i, block) in self.chain.iter().enumerate() {
            let ok = if i == 0 {
                block.is_genesis()
            } else {
                block.links_to(&self.chain[i - 1]) && block.hash == block.computed_hash()
            };
            if !ok {
                verification.valid = false;
                verification.first_invalid_index = Some(i);
                break;
            }
            verification.blocks_checked += 1;
        }

        verification
    }

    fn persist_chain(&mut self) {
        match serde_json::to_string(&self.chain) {
            Ok(json) => self.write(CHAIN_KEY, &json),
            Err(err) => warn!(%err, "failed to serialize chain"),
        }
    }

    fn persist_log(&mut self) {
        match serde_json::to_string(&self.action_log) {
            Ok(json) => self.write(ACTION_LOG_KEY, &json),
            Err(err) => warn!(%err, "failed to serialize action log"),
        }
    }

    /// Fire-and-forget write: a failed write is reported and never
    /// propagated; in-memory state stays authoritative.
    fn write(&mut self, key: &str, value: &str) {
        if let Err(err) = self.gateway.set(key, value) {
            warn!(key, %err, "session store write failed");
        }
    }
}
