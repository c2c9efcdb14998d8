//! # failsafe-ref-fleet
//!
//! Reference fleet for the FAILSAFE safety core.
//!
//! Wires the real registry, incident recorder, risk policy and coordinator
//! together over a fictional roster and demonstrates three operator flows:
//!
//! 1. **Emergency Stop**: confirmation check, fleet-wide cascade, reset.
//! 2. **Manual Intervention**: per-agent pause, quarantine, resume and an
//!    unknown id.
//! 3. **Risk Escalation**: telemetry risk scores evaluated against
//!    `policies/fleet.toml`.
//!
//! All data is hardcoded and fictional. No external systems are contacted.

pub mod fleet;
pub mod mock_data;
pub mod scenarios;
pub mod snapshot;

pub use fleet::{Fleet, FLEET_POLICY};
pub use snapshot::{FleetSnapshot, SeedIncident};

// ── Tests ─────────────────────────────────────────────────────────────────────
