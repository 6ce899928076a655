//! By-value copy of an agent's observable state.

use std::fmt;

use fate_core::{AgentId, AgentKind, GridPos};

/// What an agent looked like at one instant.  Detached from the live agent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:    AgentId,
    pub kind:  AgentKind,
    pub name:  String,
    pub pos:   GridPos,
    pub alive: bool,
    pub kills: u32,
}

impl fmt::Display for AgentSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at ({}, {}) [{}]",
            self.kind,
            self.name,
            self.pos.x,
            self.pos.y,
            if self.alive { "ALIVE" } else { "DEAD" }
        )
    }
}
