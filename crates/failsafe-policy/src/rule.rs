//! Risk rule types and configuration schema.
//!
//! A `RiskPolicyConfig` is deserialized from TOML and holds an ordered list
//! of `RiskRule`s. Rules are evaluated in declaration order and the first
//! matching rule wins. If no rule matches, the agent keeps running.

use serde::{Deserialize, Serialize};

use failsafe_contracts::{
    agent::{Agent, AgentStatus},
    incident::Severity,
};

/// Pattern value that matches anything.
pub const WILDCARD: &str = "*";

fn wildcard() -> String {
    WILDCARD.to_string()
}

fn default_severity() -> Severity {
    Severity::High
}

/// What a matching rule does to the agent.
///
/// Expressed in TOML as kebab-case strings:
/// ```toml
/// action = "stop"
/// action = "pause"
/// action = "quarantine"
/// action = "continue"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleAction {
    Stop,
    Pause,
    Quarantine,
    /// Explicit exemption: stops evaluation without intervening.
    Continue,
}

impl RuleAction {
    /// The status the agent is moved to, or `None` for `Continue`.
    pub fn target_status(&self) -> Option<AgentStatus> {
        match self {
            RuleAction::Stop => Some(AgentStatus::Stopped),
            RuleAction::Pause => Some(AgentStatus::Paused),
            RuleAction::Quarantine => Some(AgentStatus::Quarantined),
            RuleAction::Continue => None,
        }
    }
}

/// A single risk rule loaded from TOML.
///
/// `agent_kind` and `policy` accept the wildcard `"*"` (the default when
/// omitted). A rule matches when both patterns match and the agent's risk
/// score is at least `min_risk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRule {
    /// Stable identifier; appears in the incident actor as
    /// `System (Policy <id>)`.
    pub id: String,

    /// Human-readable explanation of what this rule guards against.
    pub description: String,

    /// `"PHYSICAL"`, `"INFO"`, `"HYBRID"` or `"*"`.
    #[serde(default = "wildcard")]
    pub agent_kind: String,

    /// The agent policy label to match, or `"*"`.
    #[serde(default = "wildcard")]
    pub policy: String,

    /// Inclusive lower bound on the risk score, `0..=100`.
    pub min_risk: u8,

    pub action: RuleAction,

    /// Severity of the incident raised when this rule intervenes.
    #[serde(default = "default_severity")]
    pub severity: Severity,

    /// Incident reason. Defaults to a message naming the rule and score.
    pub reason: Option<String>,
}

impl RiskRule {
    /// Return true if this rule applies to `agent` as it stands.
    ///
    /// Kind and policy comparisons are exact and case-sensitive.
    pub fn matches(&self, agent: &Agent) -> bool {
        let kind_matches = self.agent_kind == WILDCARD || self.agent_kind == agent.kind.as_str();
        let policy_matches = self.policy == WILDCARD || self.policy == agent.policy;
        kind_matches && policy_matches && agent.risk_score.value() >= self.min_risk
    }
}

/// The top-level structure deserialized from a TOML risk policy file.
///
/// Example:
/// ```toml
/// [[rules]]
/// id = "physical-critical-risk"
/// description = "Physical actuators at critical risk are halted"
/// agent_kind = "PHYSICAL"
/// min_risk = 90
/// action = "stop"
/// severity = "CRITICAL"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskPolicyConfig {
    /// Ordered list of rules. First match wins.
    #[serde(default)]
    pub rules: Vec<RiskRule>,
}
