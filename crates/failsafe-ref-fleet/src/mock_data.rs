//! Simulated fleet data for the FAILSAFE reference runtime.
//!
//! All data in this module is hardcoded and fictional. It stands in for the
//! provisioning system and historical incident store of a real deployment.

use chrono::{DateTime, TimeZone, Utc};

use failsafe_contracts::{
    agent::{Agent, AgentId, AgentKind, AgentStatus, RiskScore},
    incident::{IncidentKind, IncidentTarget, Severity},
};

use crate::snapshot::{FleetSnapshot, SeedIncident};

/// Actor recorded when the console administrator engages the emergency stop.
pub const OPERATOR_ADMIN: &str = "Operator (Admin)";

/// Actor recorded for routine manual interventions.
pub const OPERATOR_ON_SHIFT: &str = "Operator (John Doe)";

// ── Roster (mock) ─────────────────────────────────────────────────────────────

fn at(day: u32, h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, day, h, m, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn agent(
    id: &str,
    name: &str,
    kind: AgentKind,
    status: AgentStatus,
    project: &str,
    last_active: DateTime<Utc>,
    risk: u8,
    policy: &str,
) -> Agent {
    Agent {
        id: AgentId::new(id),
        name: name.to_string(),
        kind,
        status,
        project: project.to_string(),
        last_active,
        risk_score: RiskScore::new(risk).unwrap_or_default(),
        policy: policy.to_string(),
    }
}

/// Eight agents covering every kind and every status.
///
/// | id     | kind     | status      |
/// |--------|----------|-------------|
/// | ag-101 | PHYSICAL | RUNNING     |
/// | ag-102 | PHYSICAL | PAUSED      |
/// | ag-103 | INFO     | RUNNING     |
/// | ag-104 | INFO     | STOPPED     |
/// | ag-105 | HYBRID   | RUNNING     |
/// | ag-106 | PHYSICAL | QUARANTINED |
/// | ag-107 | INFO     | RUNNING     |
/// | ag-108 | HYBRID   | PAUSED      |
pub fn seed_agents() -> Vec<Agent> {
    use AgentKind::*;
    use AgentStatus::*;

    vec![
        agent("ag-101", "Assembly Arm A-7", Physical, Running, "Line 3 Assembly", at(18, 8, 4), 12, "iso-10218"),
        agent("ag-102", "Pallet Drone Kestrel", Physical, Paused, "Warehouse Logistics", at(16, 18, 20), 34, "faa-part-107"),
        agent("ag-103", "Support Concierge", Info, Running, "Customer Care", at(18, 8, 11), 8, "content-safety-v2"),
        agent("ag-104", "Claims Triage Bot", Info, Stopped, "Insurance Ops", at(12, 14, 2), 61, "pii-guard"),
        agent("ag-105", "HVAC Grid Controller", Hybrid, Running, "Campus Facilities", at(18, 7, 58), 27, "iec-62443"),
        agent("ag-106", "Lab Sandbox Rover", Physical, Quarantined, "R&D Sandbox", at(14, 9, 41), 88, "lab-sandbox"),
        agent("ag-107", "Market Signal Analyzer", Info, Running, "Treasury", at(18, 8, 9), 19, "fin-risk-v1"),
        agent("ag-108", "Cold Chain Monitor", Hybrid, Paused, "Warehouse Logistics", at(17, 23, 15), 42, "iec-62443"),
    ]
}

// ── Incident history (mock) ───────────────────────────────────────────────────

fn target(id: &str, name: &str) -> IncidentTarget {
    IncidentTarget::Agent {
        agent_id: AgentId::new(id),
        agent_name: name.to_string(),
    }
}

/// Three past incidents consistent with the seeded roster.
pub fn seed_incidents() -> Vec<SeedIncident> {
    vec![
        SeedIncident {
            timestamp: at(12, 14, 2),
            target: target("ag-104", "Claims Triage Bot"),
            kind: IncidentKind::ManualStop,
            severity: Severity::High,
            reason: "Manual status change to STOPPED".to_string(),
            actor: OPERATOR_ON_SHIFT.to_string(),
            resolved: true,
        },
        SeedIncident {
            timestamp: at(14, 9, 41),
            target: target("ag-106", "Lab Sandbox Rover"),
            kind: IncidentKind::AutoStop,
            severity: Severity::Critical,
            reason: "Collision envelope breached during path test".to_string(),
            actor: "System (Policy collision-envelope)".to_string(),
            resolved: false,
        },
        SeedIncident {
            timestamp: at(16, 18, 20),
            target: target("ag-102", "Pallet Drone Kestrel"),
            kind: IncidentKind::ManualStop,
            severity: Severity::High,
            reason: "Manual status change to PAUSED".to_string(),
            actor: OPERATOR_ON_SHIFT.to_string(),
            resolved: true,
        },
    ]
}

/// The roster and history above, as one snapshot.
pub fn seed_snapshot() -> FleetSnapshot {
    FleetSnapshot {
        agents: seed_agents(),
        incidents: seed_incidents(),
    }
}
