//! A unit of pending combat.

use std::fmt;
use std::sync::Arc;

use fate_agent::Agent;
use fate_core::AgentId;

/// Attacker and defender handles plus the distance at detection time.
///
/// Holding `Arc`s keeps both agents valid however long the task waits in the
/// queue.  `distance` is informational only; the resolver never re-checks
/// range.
#[derive(Clone)]
pub struct BattleTask {
    pub attacker: Arc<Agent>,
    pub defender: Arc<Agent>,
    pub distance: f64,
}

impl BattleTask {
    pub fn new(attacker: Arc<Agent>, defender: Arc<Agent>, distance: f64) -> Self {
        Self { attacker, defender, distance }
    }

    /// The participants as an unordered pair, smaller id first.
    pub fn pair_key(&self) -> (AgentId, AgentId) {
        let (a, b) = (self.attacker.id(), self.defender.id());
        if a <= b { (a, b) } else { (b, a) }
    }

    /// `true` if both tasks involve the same two agents, in either role.
    pub fn same_pair(&self, other: &BattleTask) -> bool {
        self.pair_key() == other.pair_key()
    }
}

impl fmt::Debug for BattleTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleTask")
            .field("attacker", &self.attacker.id())
            .field("defender", &self.defender.id())
            .field("distance", &self.distance)
            .finish()
    }
}
