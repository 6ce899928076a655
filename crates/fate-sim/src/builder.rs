//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use fate_agent::{Agent, KillObserver, RosterBuilder};
use fate_core::{FateError, SimConfig, SimRng};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                           |
/// |------------------|---------------------------------------------------|
/// | `.agents(v)`     | `config.agent_count` random agents from the seed  |
/// | `.observer(o)`   | No subscribers                                    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .observer(Arc::new(ConsoleObserver::new()))
///     .build()?;
/// let report = sim.run(&interrupt)?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    agents:    Option<Vec<Agent>>,
    observers: Vec<Arc<dyn KillObserver>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, agents: None, observers: Vec::new() }
    }

    /// Use these agents instead of a random roster.  Ids follow the order
    /// given.  Each must lie inside the configured map.
    pub fn agents(mut self, agents: Vec<Agent>) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Subscribe `observer` to every agent's kills.
    pub fn observer(mut self, observer: Arc<dyn KillObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Validate the configuration, create the roster, wire subscribers, and
    /// return an `Initialized` [`Sim`].  No thread is started.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let bounds = self.config.bounds();

        let mut rng = match self.config.seed {
            Some(seed) => SimRng::new(seed),
            None       => SimRng::from_entropy(),
        };

        let roster = match self.agents {
            Some(agents) => {
                if let Some(outside) = agents.iter().map(Agent::position).find(|p| !bounds.contains(*p)) {
                    return Err(FateError::InvalidCoordinates { x: outside.x, y: outside.y }.into());
                }
                RosterBuilder::new().agents(agents)
            }
            None => RosterBuilder::new().random_agents(self.config.agent_count, bounds, &mut rng)?,
        };
        let roster = self
            .observers
            .into_iter()
            .fold(roster, RosterBuilder::observer)
            .build()?;

        tracing::info!(
            agents = roster.len(),
            width = bounds.width,
            height = bounds.height,
            seed = ?self.config.seed,
            "simulation initialized"
        );
        Ok(Sim::new(self.config, roster, rng))
    }
}
