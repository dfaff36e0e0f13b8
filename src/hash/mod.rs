//! Block digest computation.
//!
//! Pure SHA-256 digest binding a block's timestamp, payload and parent link.

use sha2::{Digest, Sha256};

use crate::core::Timestamp;

/// Compute the digest over a block's contents.
///
/// The preimage is the decimal form of the timestamp, followed by the payload
/// encoded as a JSON string literal, followed by the parent hash. Returns the
/// lowercase hex form of the SHA-256 digest. Deterministic, no hidden state.
pub fn compute_hash(timestamp: Timestamp, data: &str, previous_hash: &str) -> String {
    let payload = serde_json::to_string(data).unwrap_or_default();
    let preimage = format!("{}{}{}", timestamp, payload, previous_hash);
    hex::encode(Sha256::digest(preimage.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        // Independently computed SHA-256 over the concatenated preimage.
        assert_eq!(
            compute_hash(1_700_000_000_000, "hello", "034DFA357"),
            "26e9a0a1873d1fa64ffeee6ac32dbc4fce162008455bfb8d7a9999f1060950a8"
        );
        assert_eq!(
            compute_hash(1_700_000_000_000, "", "000000000"),
            "38aebf84d24d855ddeccebfa232d1a1617932b0ecc2ac7267288ec834399759b"
        );
    }

    #[test]
    fn test_payload_is_json_escaped() {
        // Preimage is `42"say \"hi\"\n"abc`.
        assert_eq!(
            compute_hash(42, "say \"hi\"\n", "abc"),
            "0f686bc40f8ca614ba67ecdc36fe9dc7f2c2e13dcaaec15090503294045eaab9"
        );
    }

    #[test]
    fn test_deterministic() {
        let a = compute_hash(1_700_000_000_000, "payload", "parent");
        let b = compute_hash(1_700_000_000_000, "payload", "parent");
        assert_eq!(a, b);
    }

    #[test]
    fn test_each_input_changes_digest() {
        let base = compute_hash(1_700_000_000_000, "hello", "034DFA357");
        assert_ne!(base, compute_hash(1_700_000_000_001, "hello", "034DFA357"));
        assert_ne!(base, compute_hash(1_700_000_000_000, "world", "034DFA357"));
        assert_ne!(base, compute_hash(1_700_000_000_000, "hello", "000000000"));
    }

    #[test]
    fn test_lowercase_hex_digest() {
        let digest = compute_hash(0, "x", "y");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }
}
