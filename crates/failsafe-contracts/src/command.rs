//! Results returned by the safety coordinator's commands.

use serde::{Deserialize, Serialize};

use crate::{
    agent::{Agent, AgentId},
    incident::Incident,
};

/// The outcome of a confirmed emergency stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyStopReport {
    /// The single fleet-wide incident recorded for the cascade.
    pub incident: Incident,
    /// Agents that were running or paused and are now stopped, in roster order.
    pub stopped: Vec<AgentId>,
}

/// The outcome of a risk report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskOutcome {
    /// The agent after the new score (and any automatic intervention) was applied.
    pub agent: Agent,
    /// The `AUTO_STOP` incident, present only when the policy intervened.
    pub incident: Option<Incident>,
}
