//! Action log entries.
//!
//! Append-only audit trail of mutating chain operations.

use serde::{Deserialize, Serialize};

use crate::core::{now, Timestamp};
use crate::ledger::block::Block;

/// A mutating operation recorded in the action log.
///
/// Tagged variant; the tag strings match the persisted wire format, and the
/// reset variant carries no block payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Action {
    /// A block was appended to the chain
    #[serde(rename = "addBlock")]
    AddBlock { block: Block },
    /// The last block was amended in place
    #[serde(rename = "updateBlock")]
    UpdateBlock { block: Block },
    /// The chain was replaced with a fresh genesis block
    #[serde(rename = "resetBlockchain")]
    ResetBlockchain,
}

impl Action {
    /// The wire tag for this action.
    pub fn tag(&self) -> &'static str {
        match self {
            Action::AddBlock { .. } => "addBlock",
            Action::UpdateBlock { .. } => "updateBlock",
            Action::ResetBlockchain => "resetBlockchain",
        }
    }

    /// The block payload carried by this action, if any.
    pub fn block(&self) -> Option<&Block> {
        match self {
            Action::AddBlock { block } | Action::UpdateBlock { block } => Some(block),
            Action::ResetBlockchain => None,
        }
    }
}

/// One action-log record. Never mutated once written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the action was performed, epoch milliseconds
    pub timestamp: Timestamp,
    /// The action performed
    #[serde(flatten)]
    pub action: Action,
}

impl LogEntry {
    /// Record `action` at the current time.
    pub fn new(action: Action) -> Self {
        Self {
            timestamp: now(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::block::GENESIS_HASH;

    #[test]
    fn test_add_block_wire_shape() {
        let entry = LogEntry::new(Action::AddBlock {
            block: Block::new("x", GENESIS_HASH),
        });
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["action"], "addBlock");
        assert!(object.contains_key("timestamp"));
        assert!(object["block"].is_object());
    }

    #[test]
    fn test_reset_carries_no_block_field() {
        let entry = LogEntry::new(Action::ResetBlockchain);
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object["action"], "resetBlockchain");
        assert!(!object.contains_key("block"));
    }

    #[test]
    fn test_tag_and_block_accessors() {
        let block = Block::new("x", GENESIS_HASH);
        let add = Action::AddBlock {
            block: block.clone(),
        };
        assert_eq!(add.tag(), "addBlock");
        assert_eq!(add.block(), Some(&block));

        let update = Action::UpdateBlock { block };
        assert_eq!(update.tag(), "updateBlock");
        assert!(update.block().is_some());

        assert_eq!(Action::ResetBlockchain.tag(), "resetBlockchain");
        assert_eq!(Action::ResetBlockchain.block(), None);
    }

    #[test]
    fn test_entry_roundtrip() {
        let entries = vec![
            LogEntry::new(Action::AddBlock {
                block: Block::new("a", GENESIS_HASH),
            }),
            LogEntry::new(Action::ResetBlockchain),
        ];
        let json = serde_json::to_string(&entries).unwrap();
        let parsed: Vec<LogEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entries);
    }
}
