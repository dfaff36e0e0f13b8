//! Chain store configuration.

/// Construction-time options for [`ChainStore`](crate::ledger::ChainStore).
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Read the startup snapshot key at construction
    pub rehydrate: bool,
    /// Recompute block digests during load-time validation, in addition to
    /// the structural sentinel and parent-link checks
    pub verify_hashes_on_load: bool,
}

impl StoreConfig {
    /// Config that ignores any persisted snapshot and starts from genesis.
    pub fn fresh() -> Self {
        Self {
            rehydrate: false,
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            rehydrate: true,
            verify_hashes_on_load: true,
        }
    }
}
