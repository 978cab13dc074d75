//! Deterministic short fingerprints for messages and run metadata.

use sha2::{Digest, Sha256};

use crate::sender::SenderId;

/// First 8 bytes of the SHA-256 of `input`, hex encoded (16 chars).
pub fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..8])
}

/// Stable identifier for a logical message: the same sender, body, and
/// timestamp produce the same fingerprint on every run. Not part of the
/// serialized document; exposed for dedup and traceability tooling.
pub fn message_fingerprint(sender: SenderId, body: &str, timestamp_millis: i64) -> String {
    short_hash(&format!("{}_{}_{}", sender.address(), body, timestamp_millis))
}
