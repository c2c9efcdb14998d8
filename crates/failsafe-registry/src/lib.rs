//! # failsafe-registry
//!
//! The agent registry: source of truth for which agents exist and what
//! lifecycle status each one is in.
//!
//! [`InMemoryAgentRegistry`] implements
//! [`AgentStore`](failsafe_core::traits::AgentStore). It is deliberately
//! permissive: any status may move to any other. Transition rules, if a
//! deployment wants them, wrap the store rather than live inside it.
//!
//! ```rust,ignore
//! use failsafe_registry::InMemoryAgentRegistry;
//!
//! let registry = InMemoryAgentRegistry::from_agents(seed_roster)?;
//! ```

pub mod memory;

pub use memory::InMemoryAgentRegistry;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use failsafe_contracts::{
        agent::{Agent, AgentFilter, AgentId, AgentKind, AgentStatus, RiskScore},
        error::FailsafeError,
    };
    use failsafe_core::traits::AgentStore;

    use super::InMemoryAgentRegistry;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn make_agent(id: &str, name: &str, kind: AgentKind, status: AgentStatus) -> Agent {
        Agent {
            id: AgentId::new(id),
            name: name.to_string(),
            kind,
            status,
            project: "logistics".to_string(),
            last_active: Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap(),
            risk_score: RiskScore::new(20).unwrap(),
            policy: "standard-ops".to_string(),
        }
    }

    fn roster() -> InMemoryAgentRegistry {
        InMemoryAgentRegistry::from_agents(vec![
            make_agent("ag-001", "Forklift Alpha", AgentKind::Physical, AgentStatus::Running),
            make_agent("ag-002", "Support Bot", AgentKind::Info, AgentStatus::Paused),
            make_agent("ag-003", "HVAC Controller", AgentKind::Hybrid, AgentStatus::Stopped),
            make_agent("ag-004", "Inspection Drone", AgentKind::Physical, AgentStatus::Quarantined),
        ])
        .unwrap()
    }

    fn ids(agents: &[Agent]) -> Vec<&str> {
        agents.iter().map(|a| a.id.as_str()).collect()
    }

    // ── Seeding ───────────────────────────────────────────────────────────────

    #[test]
    fn test_duplicate_seed_id_rejected() {
        let result = InMemoryAgentRegistry::from_agents(vec![
            make_agent("dup", "One", AgentKind::Info, AgentStatus::Running),
            make_agent("dup", "Two", AgentKind::Info, AgentStatus::Running),
        ]);

        match result {
            Err(FailsafeError::Validation { reason }) => assert!(reason.contains("dup")),
            Err(other) => panic!("expected Validation, got {:?}", other),
            Ok(_) => panic!("duplicate ids must be rejected"),
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = InMemoryAgentRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.list_agents(&AgentFilter::all()).is_empty());
        assert!(registry.force_stop_active().is_empty());
    }

    // ── Listing ───────────────────────────────────────────────────────────────

    /// Listing keeps insertion order.
    #[test]
    fn test_list_preserves_insertion_order() {
        let registry = roster();
        let all = registry.list_agents(&AgentFilter::all());
        assert_eq!(ids(&all), vec!["ag-001", "ag-002", "ag-003", "ag-004"]);
    }

    #[test]
    fn test_list_filters_by_text_and_kind() {
        let registry = roster();

        let drones = registry.list_agents(&AgentFilter::text("DRONE"));
        assert_eq!(ids(&drones), vec!["ag-004"]);

        let by_id = registry.list_agents(&AgentFilter::text("-00"));
        assert_eq!(by_id.len(), 4);

        let physical = registry.list_agents(&AgentFilter::kind(AgentKind::Physical));
        assert_eq!(ids(&physical), vec!["ag-001", "ag-004"]);

        let none = registry.list_agents(&AgentFilter {
            text: Some("bot".to_string()),
            kind: Some(AgentKind::Physical),
        });
        assert!(none.is_empty());
    }

    // ── Status updates ────────────────────────────────────────────────────────

    /// Any status may move to any other, including out of quarantine.
    #[test]
    fn test_update_status_is_unconditional() {
        let registry = roster();
        let id = AgentId::new("ag-004");

        let updated = registry.update_status(&id, AgentStatus::Running).unwrap();
        assert_eq!(updated.status, AgentStatus::Running);
        assert_eq!(registry.get_agent(&id).unwrap().status, AgentStatus::Running);

        let stopped = registry.update_status(&id, AgentStatus::Stopped).unwrap();
        assert_eq!(stopped.status, AgentStatus::Stopped);
    }

    #[test]
    fn test_update_unknown_agent_is_not_found() {
        let registry = roster();
        let before = registry.list_agents(&AgentFilter::all());

        let result = registry.update_status(&AgentId::new("ghost"), AgentStatus::Stopped);

        assert!(matches!(result, Err(FailsafeError::NotFound { .. })));
        assert_eq!(registry.list_agents(&AgentFilter::all()), before);
    }

    #[test]
    fn test_force_stop_only_touches_active_agents() {
        let registry = roster();

        let stopped = registry.force_stop_active();
        assert_eq!(ids(&stopped), vec!["ag-001", "ag-002"]);

        let statuses: Vec<AgentStatus> = registry
            .list_agents(&AgentFilter::all())
            .iter()
            .map(|a| a.status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                AgentStatus::Stopped,
                AgentStatus::Stopped,
                AgentStatus::Stopped,
                AgentStatus::Quarantined,
            ]
        );

        // A second pass finds nothing left to stop.
        assert!(registry.force_stop_active().is_empty());
    }

    // ── Risk and summary ──────────────────────────────────────────────────────

    #[test]
    fn test_set_risk_score() {
        let registry = roster();
        let id = AgentId::new("ag-002");

        let updated = registry.set_risk_score(&id, RiskScore::new(88).unwrap()).unwrap();
        assert_eq!(updated.risk_score.value(), 88);
        assert_eq!(updated.status, AgentStatus::Paused);

        let missing = registry.set_risk_score(&AgentId::new("ghost"), RiskScore::new(1).unwrap());
        assert!(matches!(missing, Err(FailsafeError::NotFound { .. })));
    }

    #[test]
    fn test_summary_tracks_updates() {
        let registry = roster();
        let summary = registry.summary();
        assert_eq!((summary.total, summary.running, summary.paused), (4, 1, 1));
        assert_eq!((summary.stopped, summary.quarantined), (1, 1));

        registry.force_stop_active();
        let summary = registry.summary();
        assert_eq!(summary.stopped, 3);
        assert_eq!(summary.active(), 0);
    }
}
