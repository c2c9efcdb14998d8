//! In-memory implementation of `AgentStore`.
//!
//! Agents live in a `Vec` in insertion order, with a `HashMap` index from id
//! to position. Both sit behind one `RwLock` so bulk updates (the emergency
//! cascade) are applied under a single write guard.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::{debug, info};

use failsafe_contracts::{
    agent::{Agent, AgentFilter, AgentId, AgentStatus, FleetSummary, RiskScore},
    error::{FailsafeError, FailsafeResult},
};
use failsafe_core::traits::AgentStore;

// ── Internal state ───────────────────────────────────────────────────────────

#[derive(Default)]
struct RegistryState {
    /// Agents in insertion order.
    agents: Vec<Agent>,
    /// Position of each agent in `agents`.
    index: HashMap<AgentId, usize>,
}

impl RegistryState {
    fn position(&self, id: &AgentId) -> FailsafeResult<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| FailsafeError::not_found(id.as_str()))
    }
}

// ── Public registry ──────────────────────────────────────────────────────────

/// The agent roster, held in memory.
///
/// Agents are provisioned once from a seed roster and never removed. Status
/// and risk score are the only mutable fields.
#[derive(Default)]
pub struct InMemoryAgentRegistry {
    state: RwLock<RegistryState>,
}

impl InMemoryAgentRegistry {
    /// Build a registry from a seed roster.
    ///
    /// Returns `FailsafeError::Validation` if two agents share an id; nothing
    /// is stored in that case.
    pub fn from_agents(agents: Vec<Agent>) -> FailsafeResult<Self> {
        let mut index = HashMap::with_capacity(agents.len());
        for (pos, agent) in agents.iter().enumerate() {
            if index.insert(agent.id.clone(), pos).is_some() {
                return Err(FailsafeError::validation(format!(
                    "duplicate agent id '{}' in seed roster",
                    agent.id
                )));
            }
        }

        info!(agent_count = agents.len(), "agent registry seeded");

        Ok(Self {
            state: RwLock::new(RegistryState { agents, index }),
        })
    }

    pub fn len(&self) -> usize {
        self.read().agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Writers never leave the roster half-updated, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── AgentStore impl ──────────────────────────────────────────────────────────

impl AgentStore for InMemoryAgentRegistry {
    fn list_agents(&self, filter: &AgentFilter) -> Vec<Agent> {
        self.read()
            .agents
            .iter()
            .filter(|agent| filter.matches(agent))
            .cloned()
            .collect()
    }

    fn get_agent(&self, id: &AgentId) -> FailsafeResult<Agent> {
        let state = self.read();
        let pos = state.position(id)?;
        Ok(state.agents[pos].clone())
    }

    /// Applies any status unconditionally, including `Stopped → Running`
    /// and `Quarantined → Running`.
    fn update_status(&self, id: &AgentId, status: AgentStatus) -> FailsafeResult<Agent> {
        let mut state = self.write();
        let pos = state.position(id)?;
        let agent = &mut state.agents[pos];
        let previous = agent.status;
        agent.status = status;

        debug!(agent_id = %id, from = %previous, to = %status, "agent status updated");

        Ok(agent.clone())
    }

    fn force_stop_active(&self) -> Vec<Agent> {
        let mut state = self.write();
        let mut stopped = Vec::new();

        for agent in state.agents.iter_mut().filter(|a| a.status.is_active()) {
            agent.status = AgentStatus::Stopped;
            stopped.push(agent.clone());
        }

        info!(stopped_count = stopped.len(), "active agents force-stopped");

        stopped
    }

    fn set_risk_score(&self, id: &AgentId, score: RiskScore) -> FailsafeResult<Agent> {
        let mut state = self.write();
        let pos = state.position(id)?;
        let agent = &mut state.agents[pos];
        agent.risk_score = score;
        Ok(agent.clone())
    }

    fn summary(&self) -> FleetSummary {
        FleetSummary::from_agents(self.read().agents.iter())
    }
}
