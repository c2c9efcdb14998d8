//! Hash-chain primitives: hashing and chain integrity verification.
//!
//! Hash input layout (bytes, in order):
//!   1. sequence as 8-byte little-endian
//!   2. prev_hash as UTF-8 bytes (64 ASCII hex chars)
//!   3. canonical JSON of the incident (serde_json, no pretty-printing)

use sha2::{Digest, Sha256};

use failsafe_contracts::incident::Incident;

use crate::event::AuditEntry;

/// Compute the SHA-256 hash for one audit entry.
///
/// Returns a lowercase 64-character hex string.
///
/// # Panics
///
/// Panics if `incident` cannot be serialized to JSON, which cannot happen
/// for the plain-data `Incident` type.
pub fn hash_entry(sequence: u64, incident: &Incident, prev_hash: &str) -> String {
    let incident_json =
        serde_json::to_vec(incident).expect("Incident must always be serializable to JSON");

    let mut hasher = Sha256::new();
    hasher.update(sequence.to_le_bytes());
    hasher.update(prev_hash.as_bytes());
    hasher.update(&incident_json);

    hex::encode(hasher.finalize())
}

/// Verify the integrity of an incident chain.
///
/// Returns `true` when every entry has the expected sequence number, links
/// to the preceding entry's `this_hash` (or `GENESIS_HASH` for entry 0), and
/// carries a `this_hash` matching the value recomputed from its fields. An
/// empty chain is valid.
pub fn verify_chain(entries: &[AuditEntry]) -> bool {
    let mut expected_prev = AuditEntry::GENESIS_HASH.to_string();

    for (position, entry) in entries.iter().enumerate() {
        if entry.sequence != position as u64 || entry.prev_hash != expected_prev {
            return false;
        }

        let recomputed = hash_entry(entry.sequence, &entry.incident, &entry.prev_hash);
        if entry.this_hash != recomputed {
            return false;
        }

        expected_prev = entry.this_hash.clone();
    }

    true
}
