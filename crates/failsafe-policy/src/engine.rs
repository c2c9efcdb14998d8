//! TOML-driven risk policy implementation.
//!
//! `TomlRiskPolicy` loads a `RiskPolicyConfig` from a TOML string or file
//! and implements the `RiskPolicy` trait from failsafe-core.
//!
//! Evaluation algorithm:
//!
//! 1. Iterate rules in declaration order.
//! 2. The first rule that matches the agent's kind, policy label and risk
//!    score decides:
//!    a. `continue` → `RiskVerdict::Continue`
//!    b. otherwise  → `RiskVerdict::Intervene` with the rule's target status
//! 3. If no rule matched → `RiskVerdict::Continue`.

use std::path::Path;

use tracing::{debug, warn};

use failsafe_contracts::{
    agent::{Agent, AgentKind, RiskScore},
    error::{FailsafeError, FailsafeResult},
    policy::RiskVerdict,
};
use failsafe_core::traits::RiskPolicy;

use crate::rule::{RiskPolicyConfig, WILDCARD};

/// A `RiskPolicy` implementation that reads rules from a TOML document.
///
/// ```rust,ignore
/// use failsafe_policy::TomlRiskPolicy;
///
/// let policy = TomlRiskPolicy::from_file(Path::new("policies/fleet.toml"))?;
/// let coordinator = SafetyCoordinator::new(registry, recorder)
///     .with_risk_policy(Box::new(policy));
/// ```
#[derive(Debug)]
pub struct TomlRiskPolicy {
    config: RiskPolicyConfig,
}

impl TomlRiskPolicy {
    /// Parse `s` as TOML and build a `TomlRiskPolicy`.
    ///
    /// Returns `FailsafeError::ConfigError` if the TOML is malformed, does
    /// not match `RiskPolicyConfig`, names an unknown agent kind, or sets
    /// `min_risk` above 100.
    pub fn from_toml_str(s: &str) -> FailsafeResult<Self> {
        let config: RiskPolicyConfig = toml::from_str(s).map_err(|e| FailsafeError::ConfigError {
            reason: format!("failed to parse risk policy TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML risk policy.
    pub fn from_file(path: &Path) -> FailsafeResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| FailsafeError::ConfigError {
            reason: format!("failed to read risk policy file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validate an already-built configuration.
    pub fn from_config(config: RiskPolicyConfig) -> FailsafeResult<Self> {
        for rule in &config.rules {
            if rule.agent_kind != WILDCARD && rule.agent_kind.parse::<AgentKind>().is_err() {
                return Err(FailsafeError::ConfigError {
                    reason: format!(
                        "rule '{}' names unknown agent kind '{}'",
                        rule.id, rule.agent_kind
                    ),
                });
            }
            if RiskScore::new(rule.min_risk).is_err() {
                return Err(FailsafeError::ConfigError {
                    reason: format!(
                        "rule '{}' has min_risk {} outside 0..=100",
                        rule.id, rule.min_risk
                    ),
                });
            }
        }
        Ok(Self { config })
    }

    pub fn rule_count(&self) -> usize {
        self.config.rules.len()
    }
}

impl RiskPolicy for TomlRiskPolicy {
    fn evaluate(&self, agent: &Agent) -> FailsafeResult<RiskVerdict> {
        debug!(
            agent_id = %agent.id,
            kind = %agent.kind,
            policy = %agent.policy,
            risk_score = %agent.risk_score,
            "evaluating risk policy"
        );

        let Some(rule) = self.config.rules.iter().find(|rule| rule.matches(agent)) else {
            return Ok(RiskVerdict::Continue);
        };

        let Some(status) = rule.action.target_status() else {
            debug!(rule_id = %rule.id, agent_id = %agent.id, "exemption rule matched");
            return Ok(RiskVerdict::Continue);
        };

        warn!(
            rule_id = %rule.id,
            agent_id = %agent.id,
            risk_score = %agent.risk_score,
            status = %status,
            "risk rule requires intervention"
        );

        Ok(RiskVerdict::Intervene {
            rule_id: rule.id.clone(),
            status,
            severity: rule.severity,
            reason: rule.reason.clone().unwrap_or_else(|| {
                format!(
                    "Risk score {} reached threshold {} of rule '{}'",
                    agent.risk_score, rule.min_risk, rule.id
                )
            }),
        })
    }
}
