//! Wiring: one registry, one recorder and the coordinator that drives them.

use std::sync::Arc;

use tracing::info;

use failsafe_audit::InMemoryIncidentRecorder;
use failsafe_contracts::error::FailsafeResult;
use failsafe_core::{
    traits::{AgentStore, Clock, IncidentSink, RiskPolicy, SystemClock},
    SafetyCoordinator,
};
use failsafe_policy::TomlRiskPolicy;
use failsafe_registry::InMemoryAgentRegistry;

use crate::snapshot::FleetSnapshot;

/// The reference risk policy shipped with this crate.
pub const FLEET_POLICY: &str = include_str!("../policies/fleet.toml");

/// A running console core.
///
/// The registry and recorder handles are shared with the coordinator; the
/// shell reads through them (roster tables, log export) while every command
/// goes through `coordinator`.
pub struct Fleet {
    pub registry: Arc<InMemoryAgentRegistry>,
    pub recorder: Arc<InMemoryIncidentRecorder>,
    pub coordinator: SafetyCoordinator,
}

impl Fleet {
    /// Build a fleet from `snapshot`, stamped by the system clock.
    pub fn from_snapshot(snapshot: FleetSnapshot) -> FailsafeResult<Self> {
        Self::with_clock(snapshot, Box::new(SystemClock))
    }

    /// Build a fleet from `snapshot`, stamping new incidents with `clock`.
    ///
    /// Fails with `FailsafeError::Validation` if two agents share an id.
    pub fn with_clock(snapshot: FleetSnapshot, clock: Box<dyn Clock>) -> FailsafeResult<Self> {
        let history = snapshot.incident_history();
        let registry = Arc::new(InMemoryAgentRegistry::from_agents(snapshot.agents)?);
        let recorder = Arc::new(InMemoryIncidentRecorder::with_clock(clock).with_history(history));

        let coordinator = SafetyCoordinator::new(
            Arc::clone(&registry) as Arc<dyn AgentStore>,
            Arc::clone(&recorder) as Arc<dyn IncidentSink>,
        );

        info!(
            agents = registry.len(),
            incidents = recorder.len(),
            "fleet initialized"
        );

        Ok(Self { registry, recorder, coordinator })
    }

    /// Attach a risk policy to the coordinator.
    pub fn with_risk_policy(self, policy: Box<dyn RiskPolicy>) -> Self {
        Self {
            coordinator: self.coordinator.with_risk_policy(policy),
            ..self
        }
    }

    /// Attach the bundled `policies/fleet.toml`.
    pub fn with_reference_policy(self) -> FailsafeResult<Self> {
        let policy = TomlRiskPolicy::from_toml_str(FLEET_POLICY)?;
        Ok(self.with_risk_policy(Box::new(policy)))
    }
}
