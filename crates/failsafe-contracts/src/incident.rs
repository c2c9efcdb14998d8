//! Incident records: the immutable audit entries of the console.
//!
//! Callers describe an event as an `IncidentDraft`; the recorder stamps it
//! with an id and a timestamp and returns the finished `Incident`. Incidents
//! are never modified after that.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    agent::{Agent, AgentId},
    error::{FailsafeError, FailsafeResult},
};

/// Unique identifier for a recorded incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(pub uuid::Uuid);

impl IncidentId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for IncidentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inc-{}", self.0)
    }
}

/// How the intervention came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentKind {
    /// Raised by a policy rule without operator involvement.
    AutoStop,
    /// An operator paused, stopped or quarantined a single agent.
    ManualStop,
    /// The fleet-wide emergency stop was triggered.
    EmergencyStop,
}

impl IncidentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentKind::AutoStop => "AUTO_STOP",
            IncidentKind::ManualStop => "MANUAL_STOP",
            IncidentKind::EmergencyStop => "EMERGENCY_STOP",
        }
    }
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] =
        [Severity::Critical, Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = FailsafeError;

    fn from_str(s: &str) -> FailsafeResult<Self> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str() == s)
            .ok_or_else(|| FailsafeError::validation(format!("unknown severity '{}'", s)))
    }
}

/// What an incident is about: one agent, or the whole fleet.
///
/// The agent's display name is copied at creation time. Renaming the agent
/// later does not change existing incidents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum IncidentTarget {
    Agent { agent_id: AgentId, agent_name: String },
    Fleet,
}

impl IncidentTarget {
    /// Identifier shown for fleet-wide incidents.
    pub const FLEET_ID: &'static str = "GLOBAL";
    /// Display name shown for fleet-wide incidents.
    pub const FLEET_NAME: &'static str = "ALL AGENTS";

    pub fn agent(agent: &Agent) -> Self {
        IncidentTarget::Agent {
            agent_id: agent.id.clone(),
            agent_name: agent.name.clone(),
        }
    }

    pub fn is_fleet(&self) -> bool {
        matches!(self, IncidentTarget::Fleet)
    }

    pub fn id(&self) -> &str {
        match self {
            IncidentTarget::Agent { agent_id, .. } => agent_id.as_str(),
            IncidentTarget::Fleet => Self::FLEET_ID,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            IncidentTarget::Agent { agent_name, .. } => agent_name,
            IncidentTarget::Fleet => Self::FLEET_NAME,
        }
    }
}

/// An incident as described by the caller, before the recorder assigns an
/// id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentDraft {
    pub target: IncidentTarget,
    pub kind: IncidentKind,
    pub severity: Severity,
    /// Free-text explanation, shown in the incident log.
    pub reason: String,
    /// Who or what triggered the event, e.g. "Operator (Admin)" or
    /// "System (Policy risk-ceiling)".
    pub actor: String,
    pub resolved: bool,
}

impl IncidentDraft {
    /// Stamp the draft, producing the immutable record.
    pub fn finalize(self, id: IncidentId, timestamp: DateTime<Utc>) -> Incident {
        Incident {
            id,
            timestamp,
            target: self.target,
            kind: self.kind,
            severity: self.severity,
            reason: self.reason,
            actor: self.actor,
            resolved: self.resolved,
        }
    }
}

/// An immutable entry in the incident log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    pub timestamp: DateTime<Utc>,
    pub target: IncidentTarget,
    pub kind: IncidentKind,
    pub severity: Severity,
    pub reason: String,
    pub actor: String,
    pub resolved: bool,
}

impl Incident {
    /// Second-resolution timestamp, e.g. "2026-03-01 14:02:11".
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
