//! # failsafe-audit
//!
//! The incident recorder: an append-only, SHA-256 hash-chained log of every
//! safety-relevant event in the fleet.
//!
//! ## Overview
//!
//! Each recorded `Incident` is wrapped in an `AuditEntry` that links to the
//! previous entry via its SHA-256 hash. Altering any recorded incident, even
//! by a single byte, breaks the chain and is detected by `verify_chain`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use failsafe_audit::InMemoryIncidentRecorder;
//! use failsafe_core::traits::IncidentSink;
//!
//! let recorder = InMemoryIncidentRecorder::new();
//! recorder.record(draft)?;
//!
//! assert!(recorder.verify_integrity());
//! let newest = recorder.list_incidents(Some(5));
//! ```

pub mod chain;
pub mod event;
pub mod memory;

pub use chain::{hash_entry, verify_chain};
pub use event::{AuditEntry, IncidentLog};
pub use memory::InMemoryIncidentRecorder;

// ── Tests ─────────────────────────────────────────────────────────────────────
