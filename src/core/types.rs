//! Common types used across chainbook modules.

/// Epoch-milliseconds timestamp, matching the persisted wire format.
pub type Timestamp = i64;

/// Get the current UTC time in epoch milliseconds.
pub fn now() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_epoch_millis() {
        let ts = now();
        // Well after 2020-01-01 and well before year 10000, in milliseconds.
        assert!(ts > 1_577_836_800_000);
        assert!(ts < 253_402_300_800_000);
    }

    #[test]
    fn test_now_monotonic_enough() {
        let a = now();
        let b = now();
        assert!(b >= a);
    }
}
