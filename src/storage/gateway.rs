//! SessionStore trait definition.
//!
//! Persistence seam between the ledger and the session-scoped key-value
//! store backing it.

use crate::core::Result;

/// Key of the combined snapshot read once at startup to rehydrate.
pub const STARTUP_SNAPSHOT_KEY: &str = "blockchainData";

/// Key the chain is written under after every chain mutation.
pub const CHAIN_KEY: &str = "blockchain";

/// Key the action log is written under after every log append.
pub const ACTION_LOG_KEY: &str = "actionLog";

/// Key written only by the explicit checkpoint operation.
pub const CHECKPOINT_KEY: &str = "savedBlockchainData";

/// Session-scoped key-value persistence.
///
/// Models browser session storage: synchronous, string-keyed, string-valued,
/// cleared outside this system's control when the session ends. Writes may
/// fail (e.g. capacity exceeded); reads of absent keys yield `None`.
pub trait SessionStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`, if present.
    fn remove(&mut self, key: &str);
}
