//! The initial state a fleet is built from.
//!
//! A `FleetSnapshot` is the roster plus any incidents recorded before this
//! process started. It can be built in code (see `mock_data`) or loaded from
//! TOML:
//!
//! ```toml
//! [[agents]]
//! id = "wh-001"
//! name = "Picker Arm North"
//! kind = "PHYSICAL"
//! status = "RUNNING"
//! project = "Aisle Automation"
//! last_active = "2026-10-18T07:55:00Z"
//! risk_score = 14
//! policy = "iso-10218"
//!
//! [[incidents]]
//! timestamp = "2026-10-17T22:40:00Z"
//! target = { scope = "agent", agent_id = "wh-001", agent_name = "Picker Arm North" }
//! kind = "MANUAL_STOP"
//! severity = "HIGH"
//! reason = "Manual status change to STOPPED"
//! actor = "Operator (John Doe)"
//! resolved = true
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use failsafe_contracts::{
    agent::Agent,
    error::{FailsafeError, FailsafeResult},
    incident::{Incident, IncidentDraft, IncidentId, IncidentKind, IncidentTarget, Severity},
};

/// A historical incident as it appears in a snapshot.
///
/// Ids are not persisted; each one is assigned a fresh `IncidentId` when
/// the snapshot is loaded into a recorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedIncident {
    pub timestamp: DateTime<Utc>,
    pub target: IncidentTarget,
    pub kind: IncidentKind,
    pub severity: Severity,
    pub reason: String,
    pub actor: String,
    #[serde(default)]
    pub resolved: bool,
}

impl SeedIncident {
    pub fn into_incident(self) -> Incident {
        IncidentDraft {
            target: self.target,
            kind: self.kind,
            severity: self.severity,
            reason: self.reason,
            actor: self.actor,
            resolved: self.resolved,
        }
        .finalize(IncidentId::new(), self.timestamp)
    }
}

/// Roster and incident history used to initialize a fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub incidents: Vec<SeedIncident>,
}

impl FleetSnapshot {
    /// Parse a snapshot from TOML.
    ///
    /// Malformed documents, unknown enum values and risk scores above 100
    /// all surface as `FailsafeError::ConfigError`. Duplicate agent ids are
    /// caught later, when the registry is built.
    pub fn from_toml_str(s: &str) -> FailsafeResult<Self> {
        toml::from_str(s).map_err(|e| FailsafeError::ConfigError {
            reason: format!("failed to parse fleet snapshot TOML: {}", e),
        })
    }

    pub fn from_file(path: &Path) -> FailsafeResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| FailsafeError::ConfigError {
            reason: format!("failed to read fleet snapshot '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Finalized incident history, in snapshot order.
    pub fn incident_history(&self) -> Vec<Incident> {
        self.incidents
            .iter()
            .cloned()
            .map(SeedIncident::into_incident)
            .collect()
    }
}
