//! Scenario 1: Fleet-wide Emergency Stop
//!
//! An operator halts the whole fleet.
//!
//! Step A: the confirmation is typed in the wrong case → Unauthorized, nothing changes
//! Step B: "STOP" is typed → every RUNNING or PAUSED agent becomes STOPPED,
//!         one EMERGENCY_STOP incident is recorded, state is EMERGENCY_MODE
//! Step C: the state is reset to NORMAL; halted agents stay halted

use failsafe_contracts::{
    agent::{AgentFilter, AgentStatus},
    error::{FailsafeError, FailsafeResult},
    state::GlobalState,
};
use failsafe_core::{
    traits::{AgentStore, IncidentSink},
    EMERGENCY_STOP_CONFIRMATION,
};

use crate::{
    fleet::Fleet,
    mock_data::{seed_snapshot, OPERATOR_ADMIN},
    scenarios::{print_chain_status, print_incidents, print_roster},
};

/// Run Scenario 1: Emergency Stop.
pub fn run_scenario() -> FailsafeResult<()> {
    println!("=== Scenario 1: Emergency Stop ===");
    println!();

    let fleet = Fleet::from_snapshot(seed_snapshot())?;
    let coordinator = &fleet.coordinator;

    let before = coordinator.fleet_summary();
    println!(
        "  Fleet:         {} agents, {} active ({} running, {} paused)",
        before.total,
        before.active(),
        before.running,
        before.paused
    );
    println!("  Global state:  {}", coordinator.global_state());
    println!();

    // ── Step A: wrong confirmation ───────────────────────────────────────────

    println!("  Step A: operator types \"stop\"");
    match coordinator.trigger_emergency_stop("stop", OPERATOR_ADMIN) {
        Err(FailsafeError::Unauthorized { reason }) => {
            println!("  REJECTED:      {}", reason);
            println!(
                "  Unchanged:     state {}, {} active, {} incident(s)",
                coordinator.global_state(),
                coordinator.fleet_summary().active(),
                fleet.recorder.len()
            );
        }
        Err(e) => return Err(e),
        Ok(report) => {
            println!("  UNEXPECTED: stop accepted, {} agent(s) halted", report.stopped.len());
            return Ok(());
        }
    }
    println!();

    // ── Step B: confirmed stop ───────────────────────────────────────────────

    println!("  Step B: operator types \"{}\"", EMERGENCY_STOP_CONFIRMATION);
    let report = coordinator.trigger_emergency_stop(EMERGENCY_STOP_CONFIRMATION, OPERATOR_ADMIN)?;
    let stopped: Vec<&str> = report.stopped.iter().map(|id| id.as_str()).collect();
    println!("  Halted:        {}", stopped.join(", "));
    println!("  Incident:      {} {} ({})", report.incident.id, report.incident.kind, report.incident.severity);
    println!("  Global state:  {}", coordinator.global_state());

    let still_active = coordinator
        .list_agents(&AgentFilter::all())
        .into_iter()
        .filter(|a| a.status.is_active())
        .count();
    println!("  Active agents: {}", still_active);
    println!();

    // ── Step C: reset ────────────────────────────────────────────────────────

    println!("  Step C: operator resets the global state");
    coordinator.reset_global_state();
    let summary = coordinator.fleet_summary();
    println!("  Global state:  {}", coordinator.global_state());
    println!(
        "  Roster:        {} stopped, {} quarantined, {} running (agents are resumed one by one)",
        summary.stopped, summary.quarantined, summary.running
    );
    if coordinator.global_state() != GlobalState::Normal {
        println!("  UNEXPECTED: reset did not return to NORMAL");
    }
    println!();

    print_roster(&coordinator.list_agents(&AgentFilter::all()));
    println!();
    print_incidents(&coordinator.list_incidents(Some(2)));
    print_chain_status(&fleet.recorder);
    println!();

    let all_halted = fleet
        .registry
        .list_agents(&AgentFilter::all())
        .iter()
        .all(|a| matches!(a.status, AgentStatus::Stopped | AgentStatus::Quarantined));
    println!("  RESULT: {}", if all_halted { "fleet halted" } else { "UNEXPECTED: agents still active" });
    println!();

    Ok(())
}
