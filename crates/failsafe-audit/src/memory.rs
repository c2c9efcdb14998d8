//! In-memory implementation of `IncidentSink`.
//!
//! `InMemoryIncidentRecorder` keeps every incident in a `Vec` of hash-chained
//! `AuditEntry`s behind a `Mutex`. Entries are only ever appended.
//!
//! Timestamps come from an injected `Clock` and are clamped so they never go
//! backwards: if the clock reports a time earlier than the last recorded
//! incident, the new incident reuses the last timestamp. Newest-first
//! listing is reverse insertion order, which therefore also breaks ties.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use failsafe_contracts::{
    error::{FailsafeError, FailsafeResult},
    incident::{Incident, IncidentDraft, IncidentId},
};
use failsafe_core::traits::{Clock, IncidentSink, SystemClock};

use crate::{
    chain::{hash_entry, verify_chain},
    event::{AuditEntry, IncidentLog},
};

// ── Internal mutable state ────────────────────────────────────────────────────

pub(crate) struct RecorderState {
    /// All entries, in append order.
    pub(crate) entries: Vec<AuditEntry>,

    /// The `this_hash` of the last entry, or `GENESIS_HASH` before any
    /// entry has been appended.
    last_hash: String,

    /// Timestamp of the newest entry; floor for the next one.
    last_timestamp: Option<DateTime<Utc>>,
}

impl RecorderState {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            last_hash: AuditEntry::GENESIS_HASH.to_string(),
            last_timestamp: None,
        }
    }

    fn append(&mut self, incident: Incident) -> &AuditEntry {
        let sequence = self.entries.len() as u64;
        let prev_hash = std::mem::take(&mut self.last_hash);
        let this_hash = hash_entry(sequence, &incident, &prev_hash);

        self.last_timestamp = Some(incident.timestamp);
        self.last_hash = this_hash.clone();
        self.entries.push(AuditEntry { sequence, incident, prev_hash, this_hash });

        &self.entries[self.entries.len() - 1]
    }
}

// ── Public recorder ───────────────────────────────────────────────────────────

/// The incident log, held in memory and protected by a SHA-256 hash chain.
pub struct InMemoryIncidentRecorder {
    clock: Box<dyn Clock>,
    pub(crate) state: Mutex<RecorderState>,
}

impl InMemoryIncidentRecorder {
    /// Create an empty recorder stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create an empty recorder stamped by `clock`.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            state: Mutex::new(RecorderState::new()),
        }
    }

    /// Preload incidents recorded before this process started.
    ///
    /// The history is appended oldest first (stable on equal timestamps),
    /// and new records are never stamped earlier than the newest of them.
    pub fn with_history(mut self, mut history: Vec<Incident>) -> Self {
        history.sort_by_key(|incident| incident.timestamp);

        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        let count = history.len();
        for incident in history {
            state.append(incident);
        }

        debug!(count, "incident history loaded");
        self
    }

    // Readers tolerate a poisoned lock: `append` pushes the entry last, so
    // the chain is never observed half-written.
    fn lock(&self) -> MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Export the whole log in chain order.
    pub fn export_log(&self) -> IncidentLog {
        let state = self.lock();
        let terminal_hash = state
            .entries
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        IncidentLog {
            entries: state.entries.clone(),
            exported_at: self.clock.now(),
            terminal_hash,
        }
    }

    /// Check that the in-memory chain has not been altered.
    pub fn verify_integrity(&self) -> bool {
        let state = self.lock();
        verify_chain(&state.entries)
    }
}

impl Default for InMemoryIncidentRecorder {
    fn default() -> Self {
        Self::new()
    }
}

// ── IncidentSink impl ─────────────────────────────────────────────────────────

impl IncidentSink for InMemoryIncidentRecorder {
    /// Stamp, chain and append one incident.
    ///
    /// Returns `Err(AuditWriteFailed)` only if the internal mutex is
    /// poisoned, which cannot happen under normal operation.
    fn record(&self, draft: IncidentDraft) -> FailsafeResult<Incident> {
        let mut state = self.state.lock().map_err(|e| FailsafeError::AuditWriteFailed {
            reason: format!("incident log lock poisoned: {}", e),
        })?;

        let now = self.clock.now();
        let timestamp = match state.last_timestamp {
            Some(last) if last > now => last,
            _ => now,
        };

        let entry = state.append(draft.finalize(IncidentId::new(), timestamp));

        info!(
            sequence = entry.sequence,
            incident_id = %entry.incident.id,
            kind = %entry.incident.kind,
            severity = %entry.incident.severity,
            target = %entry.incident.target.id(),
            actor = %entry.incident.actor,
            "incident recorded"
        );

        Ok(entry.incident.clone())
    }

    fn list_incidents(&self, limit: Option<usize>) -> Vec<Incident> {
        let state = self.lock();
        state
            .entries
            .iter()
            .rev()
            .take(limit.unwrap_or(usize::MAX))
            .map(|e| e.incident.clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.lock().entries.len()
    }
}
