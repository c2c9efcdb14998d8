//! Audit entry and exported log types.
//!
//! `AuditEntry` wraps one `Incident` with its chain position and the SHA-256
//! hashes that make tampering detectable. `IncidentLog` is the exported
//! snapshot handed to operators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use failsafe_contracts::incident::Incident;

/// One link in the incident hash chain.
///
/// Changing any field of the embedded incident invalidates `this_hash` and
/// every later `prev_hash`, which `verify_chain` detects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Position in the chain, starting at 0.
    pub sequence: u64,

    /// The recorded incident.
    pub incident: Incident,

    /// SHA-256 hash (hex) of the previous entry, or `GENESIS_HASH` for the
    /// first entry.
    pub prev_hash: String,

    /// SHA-256 hash (hex) over (sequence, prev_hash, canonical JSON of
    /// incident).
    pub this_hash: String,
}

impl AuditEntry {
    /// The `prev_hash` of the first entry in every chain: 64 hex zeros.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A point-in-time export of the whole incident log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentLog {
    /// All entries in chain order (oldest first).
    pub entries: Vec<AuditEntry>,

    /// Wall-clock time (UTC) the export was taken.
    pub exported_at: DateTime<Utc>,

    /// The `this_hash` of the last entry. Empty string if the log is empty.
    pub terminal_hash: String,
}

impl IncidentLog {
    /// Incidents newest first, the order operators read them in.
    pub fn newest_first(&self) -> Vec<&Incident> {
        self.entries.iter().rev().map(|e| &e.incident).collect()
    }
}
