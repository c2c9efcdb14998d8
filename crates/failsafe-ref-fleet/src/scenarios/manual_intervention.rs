//! Scenario 2: Manual Intervention
//!
//! An operator works the roster one agent at a time:
//!
//! Step A: pause ag-103      → one MANUAL_STOP / HIGH incident, resolved
//! Step B: quarantine ag-107 → one MANUAL_STOP / HIGH incident, resolved
//! Step C: resume ag-102     → status changes, no incident
//! Step D: stop ag-999       → NotFound, the log is untouched

use failsafe_contracts::{
    agent::{AgentFilter, AgentId, AgentStatus},
    error::{FailsafeError, FailsafeResult},
};
use failsafe_core::traits::IncidentSink;

use crate::{
    fleet::Fleet,
    mock_data::{seed_snapshot, OPERATOR_ON_SHIFT},
    scenarios::{print_chain_status, print_incidents, print_roster},
};

/// Run Scenario 2: Manual Intervention.
pub fn run_scenario() -> FailsafeResult<()> {
    println!("=== Scenario 2: Manual Intervention ===");
    println!();

    let fleet = Fleet::from_snapshot(seed_snapshot())?;
    let coordinator = &fleet.coordinator;
    let history = fleet.recorder.len();

    let steps = [
        ("A", "ag-103", AgentStatus::Paused),
        ("B", "ag-107", AgentStatus::Quarantined),
        ("C", "ag-102", AgentStatus::Running),
    ];

    for (step, id, status) in steps {
        let before = fleet.recorder.len();
        let agent = coordinator.request_agent_status_change(&AgentId::new(id), status, OPERATOR_ON_SHIFT)?;
        let recorded = fleet.recorder.len() - before;
        println!("  Step {}: {} ({}) → {}", step, agent.id, agent.name, agent.status);
        println!("  Incidents recorded: {}", recorded);
    }
    println!();

    // ── Step D: unknown agent ────────────────────────────────────────────────

    println!("  Step D: operator stops ag-999");
    let before = fleet.recorder.len();
    match coordinator.request_agent_status_change(
        &AgentId::new("ag-999"),
        AgentStatus::Stopped,
        OPERATOR_ON_SHIFT,
    ) {
        Err(FailsafeError::NotFound { agent_id }) => {
            println!("  NOT FOUND:     {}", agent_id);
            println!("  Log length:    {} → {}", before, fleet.recorder.len());
        }
        Err(e) => return Err(e),
        Ok(agent) => {
            println!("  UNEXPECTED: unknown agent updated: {:?}", agent);
            return Ok(());
        }
    }
    println!();

    print_roster(&coordinator.list_agents(&AgentFilter::all()));
    println!();
    println!("  New incidents (newest first):");
    print_incidents(&coordinator.list_incidents(Some(fleet.recorder.len() - history)));
    print_chain_status(&fleet.recorder);
    println!();

    Ok(())
}
