//! Operator scenarios for the reference fleet.
//!
//! Each scenario builds a fresh fleet from the mock snapshot, drives it
//! through the coordinator the way an operator console would, and checks
//! the incident chain at the end.

pub mod emergency_stop;
pub mod manual_intervention;
pub mod risk_escalation;

use failsafe_audit::InMemoryIncidentRecorder;
use failsafe_contracts::{agent::Agent, incident::Incident};

// ── Shared output helpers ─────────────────────────────────────────────────────

/// Print agents as an aligned table.
pub fn print_roster(agents: &[Agent]) {
    println!(
        "  {:<8} {:<24} {:<9} {:<12} {:>4}  {}",
        "ID", "NAME", "KIND", "STATUS", "RISK", "POLICY"
    );
    for agent in agents {
        println!(
            "  {:<8} {:<24} {:<9} {:<12} {:>4}  {}",
            agent.id.as_str(),
            agent.name,
            agent.kind.as_str(),
            agent.status.as_str(),
            agent.risk_score.value(),
            agent.policy
        );
    }
}

/// Print incidents in the order given (callers pass newest first).
pub fn print_incidents(incidents: &[Incident]) {
    for incident in incidents {
        println!(
            "  {}  {:<14} {:<8} {:<8} {:<24} {}",
            incident.timestamp_display(),
            incident.kind.as_str(),
            incident.severity.as_str(),
            incident.target.id(),
            incident.target.name(),
            if incident.resolved { "resolved" } else { "OPEN" }
        );
        println!("      {} ({})", incident.reason, incident.actor);
    }
}

/// One-line audit chain status.
pub fn print_chain_status(recorder: &InMemoryIncidentRecorder) {
    let log = recorder.export_log();
    println!(
        "  Audit chain:   {} ({} incident(s))",
        if recorder.verify_integrity() { "VERIFIED" } else { "FAILED" },
        log.entries.len()
    );
}
