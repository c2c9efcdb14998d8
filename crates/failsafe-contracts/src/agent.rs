//! Agent identity, lifecycle status and roster query types.
//!
//! An agent is any managed automated actor: a robot arm, a chatbot, an IoT
//! controller. FAILSAFE does not model what an agent does, only whether it is
//! allowed to keep doing it.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FailsafeError, FailsafeResult};

/// Stable, globally unique identifier for one agent.
///
/// Example: AgentId("ag-physical-0042")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of actor an agent is. Fixed at provisioning time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentKind {
    /// Robot arms, drones, anything with actuators.
    Physical,
    /// Chatbots, data processors.
    Info,
    /// IoT controllers bridging both.
    Hybrid,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [AgentKind::Physical, AgentKind::Info, AgentKind::Hybrid];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Physical => "PHYSICAL",
            AgentKind::Info => "INFO",
            AgentKind::Hybrid => "HYBRID",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = FailsafeError;

    fn from_str(s: &str) -> FailsafeResult<Self> {
        AgentKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| FailsafeError::validation(format!("unknown agent kind '{}'", s)))
    }
}

/// Lifecycle status of an agent.
///
/// There is no transition graph: any status may move to any other. The
/// registry applies operator overrides as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentStatus {
    Running,
    Paused,
    Stopped,
    Quarantined,
}

impl AgentStatus {
    pub const ALL: [AgentStatus; 4] = [
        AgentStatus::Running,
        AgentStatus::Paused,
        AgentStatus::Stopped,
        AgentStatus::Quarantined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Running => "RUNNING",
            AgentStatus::Paused => "PAUSED",
            AgentStatus::Stopped => "STOPPED",
            AgentStatus::Quarantined => "QUARANTINED",
        }
    }

    /// True for the statuses an emergency stop forces to `Stopped`.
    pub fn is_active(&self) -> bool {
        matches!(self, AgentStatus::Running | AgentStatus::Paused)
    }

    /// True for the statuses that count as a manual intervention when an
    /// operator moves an agent into them.
    pub fn is_intervention(&self) -> bool {
        !matches!(self, AgentStatus::Running)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentStatus {
    type Err = FailsafeError;

    fn from_str(s: &str) -> FailsafeResult<Self> {
        AgentStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| FailsafeError::validation(format!("unknown agent status '{}'", s)))
    }
}

/// Accumulated risk signal for an agent, always within `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MAX: u8 = 100;

    /// Returns `FailsafeError::Validation` for values above 100.
    pub fn new(value: u8) -> FailsafeResult<Self> {
        if value > Self::MAX {
            return Err(FailsafeError::validation(format!(
                "risk score {} is outside 0..={}",
                value,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RiskScore {
    type Error = FailsafeError;

    fn try_from(value: u8) -> FailsafeResult<Self> {
        Self::new(value)
    }
}

impl From<RiskScore> for u8 {
    fn from(score: RiskScore) -> u8 {
        score.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One managed agent as held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    /// Display name shown to operators.
    pub name: String,
    pub kind: AgentKind,
    pub status: AgentStatus,
    /// Owning project label.
    pub project: String,
    pub last_active: DateTime<Utc>,
    pub risk_score: RiskScore,
    /// Name of the externally managed policy assigned to this agent.
    pub policy: String,
}

/// Roster query used by `list_agents`.
///
/// `text` matches case-insensitively against the display name, or as a
/// substring of the identifier. `kind` restricts to one agent kind. Both
/// default to "match everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentFilter {
    pub text: Option<String>,
    pub kind: Option<AgentKind>,
}

impl AgentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), kind: None }
    }

    pub fn kind(kind: AgentKind) -> Self {
        Self { text: None, kind: Some(kind) }
    }

    pub fn matches(&self, agent: &Agent) -> bool {
        let matches_text = match self.text.as_deref() {
            None | Some("") => true,
            Some(text) => {
                agent.name.to_lowercase().contains(&text.to_lowercase())
                    || agent.id.0.contains(text)
            }
        };
        let matches_kind = self.kind.map_or(true, |k| agent.kind == k);
        matches_text && matches_kind
    }
}

/// Per-status head count of the roster, as shown on the operator dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total: usize,
    pub running: usize,
    pub paused: usize,
    pub stopped: usize,
    pub quarantined: usize,
}

impl FleetSummary {
    pub fn from_agents<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> Self {
        let mut summary = Self::default();
        for agent in agents {
            summary.total += 1;
            match agent.status {
                AgentStatus::Running => summary.running += 1,
                AgentStatus::Paused => summary.paused += 1,
                AgentStatus::Stopped => summary.stopped += 1,
                AgentStatus::Quarantined => summary.quarantined += 1,
            }
        }
        summary
    }

    /// Agents still able to act (running or paused).
    pub fn active(&self) -> usize {
        self.running + self.paused
    }
}
