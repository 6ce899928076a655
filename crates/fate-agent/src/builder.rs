//! Fluent builder for a [`Roster`] with its kill subscribers wired in.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use fate_agent::{create_agent, NoopObserver, RosterBuilder};
//! use fate_core::{AgentKind, GridBounds, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let roster = RosterBuilder::new()
//!     .agent(create_agent(AgentKind::Bear, "Bruno", 0, 0).unwrap())
//!     .random_agents(9, GridBounds::new(100, 100), &mut rng)
//!     .unwrap()
//!     .observer(Arc::new(NoopObserver))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(roster.len(), 10);
//! ```

use std::sync::Arc;

use fate_core::{FateResult, GridBounds, SimRng};

use crate::{Agent, KillObserver, Roster, create_random_agent};

/// Collects agents and subscribers, then freezes them into a [`Roster`].
#[derive(Default)]
pub struct RosterBuilder {
    agents:    Vec<Agent>,
    observers: Vec<Arc<dyn KillObserver>>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one pre-built agent.
    pub fn agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    /// Append pre-built agents in order.
    pub fn agents(mut self, agents: impl IntoIterator<Item = Agent>) -> Self {
        self.agents.extend(agents);
        self
    }

    /// Append `count` random agents named `<Kind>_NPC_<n>`, numbering from
    /// the current roster size plus one.
    pub fn random_agents(
        mut self,
        count:  usize,
        bounds: GridBounds,
        rng:    &mut SimRng,
    ) -> FateResult<Self> {
        let base = self.agents.len();
        self.agents.reserve(count);
        for i in 0..count {
            let prefix = format!("NPC_{}", base + i + 1);
            self.agents.push(create_random_agent(&prefix, bounds, rng)?);
        }
        Ok(self)
    }

    /// Subscribe `observer` to every agent's kills.
    pub fn observer(mut self, observer: Arc<dyn KillObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Assign ids and register every observer on every agent.
    pub fn build(self) -> FateResult<Roster> {
        for agent in &self.agents {
            for observer in &self.observers {
                agent.add_observer(Arc::clone(observer));
            }
        }
        Roster::new(self.agents)
    }
}
