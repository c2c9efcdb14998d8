//! Scenario 3: Risk Escalation
//!
//! Telemetry reports new risk scores and the reference policy in
//! `policies/fleet.toml` decides what happens:
//!
//! Step A: ag-101 (PHYSICAL) at 45   → below every threshold, score stored
//! Step B: ag-101 (PHYSICAL) at 93   → physical-critical-risk stops it (AUTO_STOP)
//! Step C: ag-103 (INFO) at 88       → info-exfiltration-risk quarantines it
//! Step D: ag-106 (lab-sandbox) at 99 → exempt, no incident
//! Step E: ag-105 at 140             → Validation, nothing stored

use failsafe_contracts::{
    agent::AgentId,
    error::{FailsafeError, FailsafeResult},
};

use crate::{
    fleet::Fleet,
    mock_data::seed_snapshot,
    scenarios::{print_chain_status, print_incidents},
};

/// Run Scenario 3: Risk Escalation.
pub fn run_scenario() -> FailsafeResult<()> {
    println!("=== Scenario 3: Risk Escalation ===");
    println!();

    let fleet = Fleet::from_snapshot(seed_snapshot())?.with_reference_policy()?;
    let coordinator = &fleet.coordinator;

    let reports: [(&str, &str, u8); 4] = [
        ("A", "ag-101", 45),
        ("B", "ag-101", 93),
        ("C", "ag-103", 88),
        ("D", "ag-106", 99),
    ];

    for (step, id, score) in reports {
        let outcome = coordinator.report_risk(&AgentId::new(id), score)?;
        println!(
            "  Step {}: {} ({}) risk {} → {}",
            step, outcome.agent.id, outcome.agent.kind, outcome.agent.risk_score, outcome.agent.status
        );
        match outcome.incident {
            Some(incident) => println!("  Intervention:  {} by {}", incident.kind, incident.actor),
            None => println!("  Intervention:  none"),
        }
    }
    println!();

    // ── Step E: out-of-range score ───────────────────────────────────────────

    println!("  Step E: telemetry reports 140 for ag-105");
    match coordinator.report_risk(&AgentId::new("ag-105"), 140) {
        Err(FailsafeError::Validation { reason }) => println!("  REJECTED:      {}", reason),
        Err(e) => return Err(e),
        Ok(outcome) => {
            println!("  UNEXPECTED: score stored: {}", outcome.agent.risk_score);
            return Ok(());
        }
    }
    println!();

    print_incidents(&coordinator.list_incidents(Some(2)));
    print_chain_status(&fleet.recorder);
    println!();

    Ok(())
}
