//! The shared, reader/writer-locked agent list.
//!
//! # Access pattern
//!
//! | Caller           | Lock    | Held for                               |
//! |------------------|---------|----------------------------------------|
//! | movement worker  | write   | one whole tick: move-all then scan-all |
//! | display worker   | read    | one census                             |
//! | reports          | read    | one snapshot                           |
//!
//! The `Vec` itself is never resized after construction; the write lock
//! exists so the collision scan sees positions from a single tick.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use fate_core::{AgentId, AgentKind, FateError, FateResult};

use crate::{Agent, AgentSnapshot, KillObserver};

/// The id for roster slot `index`.  `AgentId::INVALID` is never handed out.
pub(crate) fn slot_id(index: usize) -> FateResult<AgentId> {
    AgentId::try_from(index)
        .ok()
        .filter(|id| id.is_valid())
        .ok_or(FateError::RosterFull(index))
}

/// Ordered collection of every agent in a run.  Dead agents stay in place.
pub struct Roster {
    agents: RwLock<Vec<Arc<Agent>>>,
    /// Fixed at construction so `len()` needs no lock.
    count:  usize,
}

impl Roster {
    /// Take ownership of `agents`, assigning `AgentId(i)` to the i-th one.
    pub fn new(agents: Vec<Agent>) -> FateResult<Self> {
        let agents = agents
            .into_iter()
            .enumerate()
            .map(|(i, mut agent)| {
                agent.id = slot_id(i)?;
                Ok(Arc::new(agent))
            })
            .collect::<FateResult<Vec<_>>>()?;
        let count = agents.len();
        Ok(Self { agents: RwLock::new(agents), count })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Shared access for observers of the whole roster.
    pub fn read(&self) -> FateResult<RwLockReadGuard<'_, Vec<Arc<Agent>>>> {
        self.agents.read().map_err(|_| FateError::Poisoned("roster"))
    }

    /// Exclusive access for the movement tick.
    pub fn write(&self) -> FateResult<RwLockWriteGuard<'_, Vec<Arc<Agent>>>> {
        self.agents.write().map_err(|_| FateError::Poisoned("roster"))
    }

    /// Handle to one agent by id.
    pub fn get(&self, id: AgentId) -> FateResult<Arc<Agent>> {
        self.read()?
            .get(id.index())
            .cloned()
            .ok_or(FateError::AgentNotFound(id))
    }

    /// Register `observer` on every agent.
    pub fn subscribe_all(&self, observer: Arc<dyn KillObserver>) -> FateResult<()> {
        for agent in self.read()?.iter() {
            agent.add_observer(Arc::clone(&observer));
        }
        Ok(())
    }

    /// By-value copy of every agent, taken under one read lock.
    pub fn snapshot(&self) -> FateResult<Vec<AgentSnapshot>> {
        Ok(self.read()?.iter().map(|a| a.snapshot()).collect())
    }

    /// Alive/dead counts per kind, taken under one read lock.
    pub fn census(&self) -> FateResult<Census> {
        Ok(Census::from_agents(self.read()?.iter().map(|a| (a.kind(), a.is_alive()))))
    }
}

// ── Census ────────────────────────────────────────────────────────────────────

/// Alive/dead head-count per [`AgentKind`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Census {
    alive: [usize; 3],
    dead:  [usize; 3],
}

impl Census {
    pub fn from_agents(agents: impl IntoIterator<Item = (AgentKind, bool)>) -> Self {
        let mut census = Census::default();
        for (kind, alive) in agents {
            if alive {
                census.alive[kind.ordinal()] += 1;
            } else {
                census.dead[kind.ordinal()] += 1;
            }
        }
        census
    }

    pub fn from_snapshots(snapshots: &[AgentSnapshot]) -> Self {
        Self::from_agents(snapshots.iter().map(|s| (s.kind, s.alive)))
    }

    #[inline]
    pub fn alive_of(&self, kind: AgentKind) -> usize {
        self.alive[kind.ordinal()]
    }

    #[inline]
    pub fn dead_of(&self, kind: AgentKind) -> usize {
        self.dead[kind.ordinal()]
    }

    pub fn alive(&self) -> usize {
        self.alive.iter().sum()
    }

    pub fn dead(&self) -> usize {
        self.dead.iter().sum()
    }

    pub fn total(&self) -> usize {
        self.alive() + self.dead()
    }
}
