//! The safety coordinator: owner of the global state.
//!
//! Every command runs to completion while holding the coordinator's state
//! lock, so commands never interleave:
//!
//!   validate → record incident → mutate roster → set global state
//!
//! All fallible steps come before the first mutation. A rejected command
//! (wrong confirmation token, unknown agent, out-of-range score) leaves the
//! roster, the incident log and the global state untouched.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use failsafe_contracts::{
    agent::{Agent, AgentFilter, AgentId, AgentStatus, FleetSummary, RiskScore},
    command::{EmergencyStopReport, RiskOutcome},
    error::{FailsafeError, FailsafeResult},
    incident::{Incident, IncidentDraft, IncidentKind, IncidentTarget, Severity},
    policy::RiskVerdict,
    state::GlobalState,
};

use crate::traits::{AgentStore, IncidentSink, RiskPolicy};

/// The literal an operator must type to confirm a fleet-wide emergency stop.
///
/// Matched exactly and case-sensitively.
pub const EMERGENCY_STOP_CONFIRMATION: &str = "STOP";

/// Reason written on the fleet-wide emergency-stop incident.
pub const EMERGENCY_STOP_REASON: &str = "Global Emergency Stop triggered by Operator";

/// Coordinates fleet-wide safety commands.
///
/// Holds shared handles to the agent store and the incident sink; the
/// presentation shell keeps its own handles for read-only queries. The
/// global state lives only here and changes only through the methods below.
pub struct SafetyCoordinator {
    registry: Arc<dyn AgentStore>,
    incidents: Arc<dyn IncidentSink>,
    risk_policy: Option<Box<dyn RiskPolicy>>,
    state: Mutex<GlobalState>,
}

impl SafetyCoordinator {
    /// Create a coordinator in `GlobalState::Normal` with no risk policy.
    pub fn new(registry: Arc<dyn AgentStore>, incidents: Arc<dyn IncidentSink>) -> Self {
        Self {
            registry,
            incidents,
            risk_policy: None,
            state: Mutex::new(GlobalState::Normal),
        }
    }

    /// Attach the policy consulted by `report_risk`.
    pub fn with_risk_policy(mut self, policy: Box<dyn RiskPolicy>) -> Self {
        self.risk_policy = Some(policy);
        self
    }

    // A poisoned lock still holds a valid `GlobalState`: every write is a
    // single assignment.
    fn lock_state(&self) -> MutexGuard<'_, GlobalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn global_state(&self) -> GlobalState {
        *self.lock_state()
    }

    pub fn list_agents(&self, filter: &AgentFilter) -> Vec<Agent> {
        let _guard = self.lock_state();
        self.registry.list_agents(filter)
    }

    pub fn list_incidents(&self, limit: Option<usize>) -> Vec<Incident> {
        let _guard = self.lock_state();
        self.incidents.list_incidents(limit)
    }

    pub fn fleet_summary(&self) -> FleetSummary {
        let _guard = self.lock_state();
        self.registry.summary()
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    /// Halt the whole fleet.
    ///
    /// `confirmation_token` must equal [`EMERGENCY_STOP_CONFIRMATION`]
    /// exactly; anything else returns `FailsafeError::Unauthorized` with no
    /// side effects.
    ///
    /// On success, in one step:
    /// 1. one `EMERGENCY_STOP` / `CRITICAL` incident targeting the whole
    ///    fleet is recorded, unresolved, with `actor` as its actor
    /// 2. every running or paused agent is moved to `Stopped`; stopped and
    ///    quarantined agents are left as they are
    /// 3. the global state becomes `EmergencyMode`
    pub fn trigger_emergency_stop(
        &self,
        confirmation_token: &str,
        actor: &str,
    ) -> FailsafeResult<EmergencyStopReport> {
        let mut state = self.lock_state();

        if confirmation_token != EMERGENCY_STOP_CONFIRMATION {
            warn!(
                actor = %actor,
                global_state = %state.as_str(),
                "emergency stop rejected: confirmation phrase mismatch"
            );
            return Err(FailsafeError::Unauthorized {
                reason: "emergency stop confirmation phrase does not match".to_string(),
            });
        }

        let incident = self.incidents.record(IncidentDraft {
            target: IncidentTarget::Fleet,
            kind: IncidentKind::EmergencyStop,
            severity: Severity::Critical,
            reason: EMERGENCY_STOP_REASON.to_string(),
            actor: actor.to_string(),
            resolved: false,
        })?;

        let stopped: Vec<AgentId> = self
            .registry
            .force_stop_active()
            .into_iter()
            .map(|agent| agent.id)
            .collect();

        let previous = *state;
        *state = GlobalState::EmergencyMode;

        warn!(
            actor = %actor,
            previous_state = %previous,
            stopped_count = stopped.len(),
            incident_id = %incident.id,
            "emergency stop engaged"
        );

        Ok(EmergencyStopReport { incident, stopped })
    }

    /// Return the global state to `Normal`.
    ///
    /// Agents stopped by a cascade stay stopped until resumed one by one.
    /// No incident is recorded.
    pub fn reset_global_state(&self) {
        let mut state = self.lock_state();
        info!(previous_state = %state.as_str(), "global state reset to NORMAL");
        *state = GlobalState::Normal;
    }

    /// Assign a non-emergency global state (`Normal` or `PartialStop`).
    ///
    /// `EmergencyMode` is only reachable through `trigger_emergency_stop`;
    /// asking for it here returns `FailsafeError::Validation`.
    pub fn set_global_state(&self, new_state: GlobalState) -> FailsafeResult<()> {
        let mut state = self.lock_state();

        if new_state == GlobalState::EmergencyMode {
            return Err(FailsafeError::validation(
                "EMERGENCY_MODE can only be entered through a confirmed emergency stop",
            ));
        }

        debug!(previous_state = %state.as_str(), new_state = %new_state, "global state set");
        *state = new_state;
        Ok(())
    }

    /// Apply an operator's status change to one agent.
    ///
    /// Moving an agent to `Stopped`, `Paused` or `Quarantined` records one
    /// `MANUAL_STOP` / `HIGH` incident, resolved, naming the new status.
    /// Resuming (`Running`) records nothing. Unknown agents fail with
    /// `FailsafeError::NotFound` and leave the log untouched.
    pub fn request_agent_status_change(
        &self,
        agent_id: &AgentId,
        new_status: AgentStatus,
        actor: &str,
    ) -> FailsafeResult<Agent> {
        let _guard = self.lock_state();

        let current = self.registry.get_agent(agent_id)?;

        if new_status.is_intervention() {
            let incident = self.incidents.record(IncidentDraft {
                target: IncidentTarget::agent(&current),
                kind: IncidentKind::ManualStop,
                severity: Severity::High,
                reason: format!("Manual status change to {}", new_status),
                actor: actor.to_string(),
                resolved: true,
            })?;
            debug!(incident_id = %incident.id, agent_id = %agent_id, "manual intervention recorded");
        }

        let updated = self.registry.update_status(agent_id, new_status)?;

        info!(
            agent_id = %agent_id,
            from = %current.status,
            to = %updated.status,
            actor = %actor,
            "agent status changed by operator"
        );

        Ok(updated)
    }

    /// Store a new risk score for an agent and apply the risk policy.
    ///
    /// Scores above 100 fail with `FailsafeError::Validation`. When the
    /// policy intervenes and the agent is still active, the agent is moved
    /// to the rule's status and one unresolved `AUTO_STOP` incident is
    /// recorded with actor `System (Policy <rule-id>)`.
    pub fn report_risk(&self, agent_id: &AgentId, score: u8) -> FailsafeResult<RiskOutcome> {
        let _guard = self.lock_state();

        let score = RiskScore::new(score)?;
        let mut candidate = self.registry.get_agent(agent_id)?;
        candidate.risk_score = score;

        let verdict = match &self.risk_policy {
            Some(policy) => policy.evaluate(&candidate)?,
            None => RiskVerdict::Continue,
        };

        let intervention = match verdict {
            RiskVerdict::Intervene { rule_id, status, severity, reason }
                if candidate.status.is_active() && candidate.status != status =>
            {
                let incident = self.incidents.record(IncidentDraft {
                    target: IncidentTarget::agent(&candidate),
                    kind: IncidentKind::AutoStop,
                    severity,
                    reason,
                    actor: format!("System (Policy {})", rule_id),
                    resolved: false,
                })?;
                Some((status, incident))
            }
            RiskVerdict::Intervene { rule_id, .. } => {
                debug!(
                    agent_id = %agent_id,
                    rule_id = %rule_id,
                    status = %candidate.status,
                    "risk rule fired but agent is already halted or in the target status"
                );
                None
            }
            RiskVerdict::Continue => None,
        };

        let mut agent = self.registry.set_risk_score(agent_id, score)?;

        let incident = match intervention {
            Some((status, incident)) => {
                agent = self.registry.update_status(agent_id, status)?;
                warn!(
                    agent_id = %agent_id,
                    risk_score = %score,
                    status = %status,
                    actor = %incident.actor,
                    "agent halted by risk policy"
                );
                Some(incident)
            }
            None => {
                debug!(agent_id = %agent_id, risk_score = %score, "risk score updated");
                None
            }
        };

        Ok(RiskOutcome { agent, incident })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{TimeZone, Utc};

    use failsafe_contracts::{
        agent::{Agent, AgentFilter, AgentId, AgentKind, AgentStatus, FleetSummary, RiskScore},
        error::{FailsafeError, FailsafeResult},
        incident::{Incident, IncidentDraft, IncidentId, IncidentKind, IncidentTarget, Severity},
        policy::RiskVerdict,
        state::GlobalState,
    };

    use crate::traits::{AgentStore, IncidentSink, RiskPolicy};

    use super::{SafetyCoordinator, EMERGENCY_STOP_CONFIRMATION, EMERGENCY_STOP_REASON};

    // ── Mock helpers ─────────────────────────────────────────────────────────

    fn make_agent(id: &str, status: AgentStatus) -> Agent {
        Agent {
            id: AgentId::new(id),
            name: format!("Agent {}", id),
            kind: AgentKind::Physical,
            status,
            project: "test".to_string(),
            last_active: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            risk_score: RiskScore::new(5).unwrap(),
            policy: "default".to_string(),
        }
    }

    /// A vector-backed roster.
    struct MockStore {
        agents: Mutex<Vec<Agent>>,
    }

    impl MockStore {
        fn new(agents: Vec<Agent>) -> Arc<Self> {
            Arc::new(Self { agents: Mutex::new(agents) })
        }

        fn status_of(&self, id: &str) -> AgentStatus {
            self.agents.lock().unwrap().iter().find(|a| a.id.0 == id).unwrap().status
        }
    }

    impl AgentStore for MockStore {
        fn list_agents(&self, filter: &AgentFilter) -> Vec<Agent> {
            self.agents.lock().unwrap().iter().filter(|a| filter.matches(a)).cloned().collect()
        }

        fn get_agent(&self, id: &AgentId) -> FailsafeResult<Agent> {
            self.agents
                .lock()
                .unwrap()
                .iter()
                .find(|a| &a.id == id)
                .cloned()
                .ok_or_else(|| FailsafeError::not_found(id.as_str()))
        }

        fn update_status(&self, id: &AgentId, status: AgentStatus) -> FailsafeResult<Agent> {
            let mut agents = self.agents.lock().unwrap();
            let agent = agents
                .iter_mut()
                .find(|a| &a.id == id)
                .ok_or_else(|| FailsafeError::not_found(id.as_str()))?;
            agent.status = status;
            Ok(agent.clone())
        }

        fn force_stop_active(&self) -> Vec<Agent> {
            let mut agents = self.agents.lock().unwrap();
            let mut changed = vec![];
            for agent in agents.iter_mut().filter(|a| a.status.is_active()) {
                agent.status = AgentStatus::Stopped;
                changed.push(agent.clone());
            }
            changed
        }

        fn set_risk_score(&self, id: &AgentId, score: RiskScore) -> FailsafeResult<Agent> {
            let mut agents = self.agents.lock().unwrap();
            let agent = agents
                .iter_mut()
                .find(|a| &a.id == id)
                .ok_or_else(|| FailsafeError::not_found(id.as_str()))?;
            agent.risk_score = score;
            Ok(agent.clone())
        }

        fn summary(&self) -> FleetSummary {
            FleetSummary::from_agents(self.agents.lock().unwrap().iter())
        }
    }

    /// A sink that records every draft, newest last.
    struct MockSink {
        records: Mutex<Vec<Incident>>,
    }

    impl MockSink {
        fn new() -> Arc<Self> {
            Arc::new(Self { records: Mutex::new(vec![]) })
        }
    }

    impl IncidentSink for MockSink {
        fn record(&self, draft: IncidentDraft) -> FailsafeResult<Incident> {
            let incident = draft.finalize(IncidentId::new(), Utc::now());
            self.records.lock().unwrap().push(incident.clone());
            Ok(incident)
        }

        fn list_incidents(&self, limit: Option<usize>) -> Vec<Incident> {
            let records = self.records.lock().unwrap();
            records.iter().rev().take(limit.unwrap_or(usize::MAX)).cloned().collect()
        }

        fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    /// A policy that always returns a pre-configured verdict.
    struct MockPolicy {
        verdict: RiskVerdict,
    }

    impl RiskPolicy for MockPolicy {
        fn evaluate(&self, _agent: &Agent) -> FailsafeResult<RiskVerdict> {
            Ok(self.verdict.clone())
        }
    }

    fn coordinator(agents: Vec<Agent>) -> (SafetyCoordinator, Arc<MockStore>, Arc<MockSink>) {
        let store = MockStore::new(agents);
        let sink = MockSink::new();
        let coordinator = SafetyCoordinator::new(store.clone(), sink.clone());
        (coordinator, store, sink)
    }

    fn four_status_roster() -> Vec<Agent> {
        vec![
            make_agent("run", AgentStatus::Running),
            make_agent("pause", AgentStatus::Paused),
            make_agent("stop", AgentStatus::Stopped),
            make_agent("quar", AgentStatus::Quarantined),
        ]
    }

    // ── Emergency stop ───────────────────────────────────────────────────────

    #[test]
    fn starts_in_normal_state() {
        let (coordinator, _, _) = coordinator(vec![]);
        assert_eq!(coordinator.global_state(), GlobalState::Normal);
    }

    /// Running and paused agents are stopped; stopped and quarantined agents
    /// keep their status.
    #[test]
    fn cascade_stops_only_active_agents() {
        let (coordinator, store, _) = coordinator(four_status_roster());

        let report = coordinator
            .trigger_emergency_stop(EMERGENCY_STOP_CONFIRMATION, "Operator (Admin)")
            .unwrap();

        assert_eq!(store.status_of("run"), AgentStatus::Stopped);
        assert_eq!(store.status_of("pause"), AgentStatus::Stopped);
        assert_eq!(store.status_of("stop"), AgentStatus::Stopped);
        assert_eq!(store.status_of("quar"), AgentStatus::Quarantined);

        let stopped: Vec<&str> = report.stopped.iter().map(|id| id.as_str()).collect();
        assert_eq!(stopped, vec!["run", "pause"]);
        assert_eq!(coordinator.global_state(), GlobalState::EmergencyMode);
    }

    /// Exactly one EMERGENCY_STOP incident per cascade, whatever the fleet size.
    #[test]
    fn cascade_records_single_incident_for_any_fleet_size() {
        for size in [0usize, 1, 5] {
            let agents = (0..size).map(|i| make_agent(&format!("a{}", i), AgentStatus::Running)).collect();
            let (coordinator, _, sink) = coordinator(agents);

            coordinator.trigger_emergency_stop("STOP", "Operator (Admin)").unwrap();

            let incidents = sink.list_incidents(None);
            assert_eq!(incidents.len(), 1, "fleet of {} must produce one incident", size);
            let incident = &incidents[0];
            assert_eq!(incident.kind, IncidentKind::EmergencyStop);
            assert_eq!(incident.severity, Severity::Critical);
            assert_eq!(incident.target, IncidentTarget::Fleet);
            assert_eq!(incident.reason, EMERGENCY_STOP_REASON);
            assert_eq!(incident.actor, "Operator (Admin)");
            assert!(!incident.resolved);
        }
    }

    /// A wrong token changes nothing.
    #[test]
    fn wrong_token_is_rejected_without_side_effects() {
        for token in ["stop", "", "STOP ", "Stop"] {
            let (coordinator, store, sink) = coordinator(four_status_roster());
            coordinator.set_global_state(GlobalState::PartialStop).unwrap();

            let result = coordinator.trigger_emergency_stop(token, "Operator (Admin)");

            assert!(
                matches!(result, Err(FailsafeError::Unauthorized { .. })),
                "token {:?} must be rejected",
                token
            );
            assert_eq!(coordinator.global_state(), GlobalState::PartialStop);
            assert_eq!(store.status_of("run"), AgentStatus::Running);
            assert_eq!(store.status_of("pause"), AgentStatus::Paused);
            assert_eq!(sink.len(), 0);
        }
    }

    #[test]
    fn repeated_trigger_records_again_and_stops_nothing_new() {
        let (coordinator, _, sink) = coordinator(four_status_roster());

        coordinator.trigger_emergency_stop("STOP", "Operator (Admin)").unwrap();
        let second = coordinator.trigger_emergency_stop("STOP", "Operator (Admin)").unwrap();

        assert!(second.stopped.is_empty());
        assert_eq!(sink.len(), 2);
    }

    // ── Global state ─────────────────────────────────────────────────────────

    #[test]
    fn reset_leaves_agents_stopped_and_records_nothing() {
        let (coordinator, store, sink) = coordinator(four_status_roster());
        coordinator.trigger_emergency_stop("STOP", "Operator (Admin)").unwrap();

        coordinator.reset_global_state();

        assert_eq!(coordinator.global_state(), GlobalState::Normal);
        assert_eq!(store.status_of("run"), AgentStatus::Stopped);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn set_global_state_assigns_partial_stop_and_back() {
        let (coordinator, store, sink) = coordinator(four_status_roster());

        coordinator.set_global_state(GlobalState::PartialStop).unwrap();
        assert_eq!(coordinator.global_state(), GlobalState::PartialStop);

        coordinator.set_global_state(GlobalState::Normal).unwrap();
        assert_eq!(coordinator.global_state(), GlobalState::Normal);

        assert_eq!(store.status_of("run"), AgentStatus::Running);
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn set_global_state_refuses_emergency_mode() {
        let (coordinator, store, _) = coordinator(four_status_roster());

        let result = coordinator.set_global_state(GlobalState::EmergencyMode);

        assert!(matches!(result, Err(FailsafeError::Validation { .. })));
        assert_eq!(coordinator.global_state(), GlobalState::Normal);
        assert_eq!(store.status_of("run"), AgentStatus::Running);
    }

    // ── Manual interventions ─────────────────────────────────────────────────

    #[test]
    fn halting_statuses_record_manual_stop() {
        for status in [AgentStatus::Stopped, AgentStatus::Paused, AgentStatus::Quarantined] {
            let (coordinator, store, sink) = coordinator(vec![make_agent("a1", AgentStatus::Running)]);

            let updated = coordinator
                .request_agent_status_change(&AgentId::new("a1"), status, "Operator (John Doe)")
                .unwrap();

            assert_eq!(updated.status, status);
            assert_eq!(store.status_of("a1"), status);

            let incidents = sink.list_incidents(None);
            assert_eq!(incidents.len(), 1);
            let incident = &incidents[0];
            assert_eq!(incident.kind, IncidentKind::ManualStop);
            assert_eq!(incident.severity, Severity::High);
            assert!(incident.resolved);
            assert_eq!(incident.actor, "Operator (John Doe)");
            assert_eq!(incident.reason, format!("Manual status change to {}", status));
            assert_eq!(incident.target.id(), "a1");
            assert_eq!(incident.target.name(), "Agent a1");
        }
    }

    #[test]
    fn resume_records_nothing() {
        let (coordinator, store, sink) = coordinator(vec![make_agent("a1", AgentStatus::Stopped)]);

        coordinator
            .request_agent_status_change(&AgentId::new("a1"), AgentStatus::Running, "Operator (John Doe)")
            .unwrap();

        assert_eq!(store.status_of("a1"), AgentStatus::Running);
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn unknown_agent_is_not_found_and_log_unchanged() {
        let (coordinator, _, sink) = coordinator(vec![make_agent("a1", AgentStatus::Running)]);

        let result = coordinator.request_agent_status_change(
            &AgentId::new("no-such-id"),
            AgentStatus::Stopped,
            "Operator (John Doe)",
        );

        match result {
            Err(FailsafeError::NotFound { agent_id }) => assert_eq!(agent_id, "no-such-id"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(sink.len(), 0);
    }

    // ── Risk reports ─────────────────────────────────────────────────────────

    fn stop_verdict() -> RiskVerdict {
        RiskVerdict::Intervene {
            rule_id: "risk-ceiling".to_string(),
            status: AgentStatus::Stopped,
            severity: Severity::Critical,
            reason: "risk above ceiling".to_string(),
        }
    }

    #[test]
    fn risk_report_without_policy_only_updates_score() {
        let (coordinator, store, sink) = coordinator(vec![make_agent("a1", AgentStatus::Running)]);

        let outcome = coordinator.report_risk(&AgentId::new("a1"), 97).unwrap();

        assert_eq!(outcome.agent.risk_score.value(), 97);
        assert!(outcome.incident.is_none());
        assert_eq!(store.status_of("a1"), AgentStatus::Running);
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn risk_policy_intervention_halts_active_agent() {
        let (coordinator, store, sink) = coordinator(vec![make_agent("a1", AgentStatus::Running)]);
        let coordinator = coordinator.with_risk_policy(Box::new(MockPolicy { verdict: stop_verdict() }));

        let outcome = coordinator.report_risk(&AgentId::new("a1"), 95).unwrap();

        assert_eq!(outcome.agent.status, AgentStatus::Stopped);
        assert_eq!(outcome.agent.risk_score.value(), 95);
        assert_eq!(store.status_of("a1"), AgentStatus::Stopped);

        let incident = outcome.incident.expect("intervention must be recorded");
        assert_eq!(incident.kind, IncidentKind::AutoStop);
        assert_eq!(incident.severity, Severity::Critical);
        assert_eq!(incident.actor, "System (Policy risk-ceiling)");
        assert!(!incident.resolved);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn risk_policy_ignores_already_halted_agents() {
        let (coordinator, store, sink) = coordinator(vec![make_agent("q", AgentStatus::Quarantined)]);
        let coordinator = coordinator.with_risk_policy(Box::new(MockPolicy { verdict: stop_verdict() }));

        let outcome = coordinator.report_risk(&AgentId::new("q"), 99).unwrap();

        assert!(outcome.incident.is_none());
        assert_eq!(store.status_of("q"), AgentStatus::Quarantined);
        assert_eq!(outcome.agent.risk_score.value(), 99);
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn risk_policy_skips_agent_already_in_target_status() {
        let (coordinator, store, sink) = coordinator(vec![make_agent("p", AgentStatus::Paused)]);
        let verdict = RiskVerdict::Intervene {
            rule_id: "elevated".to_string(),
            status: AgentStatus::Paused,
            severity: Severity::High,
            reason: "risk elevated".to_string(),
        };
        let coordinator = coordinator.with_risk_policy(Box::new(MockPolicy { verdict }));

        let outcome = coordinator.report_risk(&AgentId::new("p"), 85).unwrap();

        assert!(outcome.incident.is_none());
        assert_eq!(outcome.agent.status, AgentStatus::Paused);
        assert_eq!(outcome.agent.risk_score.value(), 85);
        assert_eq!(store.status_of("p"), AgentStatus::Paused);
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn out_of_range_risk_is_rejected_before_mutation() {
        let (coordinator, store, sink) = coordinator(vec![make_agent("a1", AgentStatus::Running)]);
        let coordinator = coordinator.with_risk_policy(Box::new(MockPolicy { verdict: stop_verdict() }));

        let result = coordinator.report_risk(&AgentId::new("a1"), 150);

        assert!(matches!(result, Err(FailsafeError::Validation { .. })));
        let agent = store.get_agent(&AgentId::new("a1")).unwrap();
        assert_eq!(agent.risk_score.value(), 5);
        assert_eq!(agent.status, AgentStatus::Running);
        assert_eq!(sink.len(), 0);
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    #[test]
    fn pass_through_queries() {
        let (coordinator, _, _) = coordinator(four_status_roster());
        coordinator
            .request_agent_status_change(&AgentId::new("run"), AgentStatus::Paused, "Operator (John Doe)")
            .unwrap();

        let summary = coordinator.fleet_summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.paused, 2);
        assert_eq!(summary.running, 0);

        assert_eq!(coordinator.list_agents(&AgentFilter::text("quar")).len(), 1);
        assert_eq!(coordinator.list_incidents(Some(5)).len(), 1);
    }
}
