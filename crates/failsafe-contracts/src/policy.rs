//! Risk policy verdicts.
//!
//! When a new risk score is reported for an agent, the configured risk
//! policy looks at the agent and decides whether it may keep running.

use serde::{Deserialize, Serialize};

use crate::{agent::AgentStatus, incident::Severity};

/// The decision a risk policy returns for one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskVerdict {
    /// No rule fired. The agent keeps its current status.
    Continue,

    /// A rule fired and the agent must be moved to `status`.
    ///
    /// Applied only to agents that are still active; an agent that is
    /// already stopped or quarantined is left alone.
    Intervene {
        /// Identifier of the rule that fired, used in the incident actor.
        rule_id: String,
        /// Target status. Never `Running`.
        status: AgentStatus,
        severity: Severity,
        reason: String,
    },
}
