//! Component traits for the FAILSAFE console core.
//!
//! These traits mark the seams between the coordinator and the components it
//! drives:
//!
//! - `AgentStore`: the agent roster (source of truth for status)
//! - `IncidentSink`: the append-only incident log
//! - `RiskPolicy`: automatic intervention rules, evaluated on risk reports
//! - `Clock`: wall-clock source for incident timestamps
//!
//! All methods take `&self`; implementations keep their state behind a lock
//! so one instance can be shared between the coordinator and the shell.

use chrono::{DateTime, Utc};

use failsafe_contracts::{
    agent::{Agent, AgentFilter, AgentId, AgentStatus, FleetSummary, RiskScore},
    error::FailsafeResult,
    incident::{Incident, IncidentDraft},
    policy::RiskVerdict,
};

/// The agent roster.
///
/// Status updates are unconditional: the store performs no transition
/// checks. A stricter graph belongs in a wrapper around the store.
pub trait AgentStore: Send + Sync {
    /// Agents matching `filter`, in insertion order. Never fails.
    fn list_agents(&self, filter: &AgentFilter) -> Vec<Agent>;

    /// Look up one agent. `FailsafeError::NotFound` for unknown ids.
    fn get_agent(&self, id: &AgentId) -> FailsafeResult<Agent>;

    /// Move the agent to `status` and return the updated snapshot.
    ///
    /// Does not record an incident; auditing is the caller's job.
    fn update_status(&self, id: &AgentId, status: AgentStatus) -> FailsafeResult<Agent>;

    /// Move every running or paused agent to `Stopped` in one step.
    ///
    /// Returns the agents that changed, in roster order.
    fn force_stop_active(&self) -> Vec<Agent>;

    /// Replace the agent's risk score and return the updated snapshot.
    fn set_risk_score(&self, id: &AgentId, score: RiskScore) -> FailsafeResult<Agent>;

    /// Per-status head count of the whole roster.
    fn summary(&self) -> FleetSummary;
}

/// The incident log.
pub trait IncidentSink: Send + Sync {
    /// Stamp `draft` with an id and timestamp, append it, and return the
    /// finished record.
    ///
    /// Timestamps never decrease across calls.
    fn record(&self, draft: IncidentDraft) -> FailsafeResult<Incident>;

    /// Incidents newest first, truncated to `limit` when given.
    fn list_incidents(&self, limit: Option<usize>) -> Vec<Incident>;

    /// Number of incidents recorded so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Automatic intervention rules.
///
/// Implementations must be deterministic and free of I/O; the coordinator
/// calls `evaluate` while holding its command lock.
pub trait RiskPolicy: Send + Sync {
    /// Decide whether `agent`, carrying its newly reported risk score, must
    /// be halted.
    fn evaluate(&self, agent: &Agent) -> FailsafeResult<RiskVerdict>;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// `Clock` backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
