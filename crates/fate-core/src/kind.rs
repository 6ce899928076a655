//! The closed set of agent kinds and the cyclic dominance rule.
//!
//! ```text
//!   Bear ──kills──▶ Werewolf ──kills──▶ Bandit ──kills──▶ Bear
//! ```
//!
//! Every kind kills exactly one other kind and is killed by exactly one other
//! kind.  The relation is irreflexive: same-kind pairs never fight.

use std::fmt;
use std::str::FromStr;

use crate::FateError;

/// Agent species.  Carries its movement and kill-range constants.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Bear,
    Werewolf,
    Bandit,
}

impl AgentKind {
    /// All kinds, in report order.
    pub const ALL: [AgentKind; 3] = [AgentKind::Bear, AgentKind::Werewolf, AgentKind::Bandit];

    /// Maximum per-axis displacement per movement tick.
    #[inline]
    pub const fn move_distance(self) -> i32 {
        match self {
            AgentKind::Bear     => 5,
            AgentKind::Werewolf => 40,
            AgentKind::Bandit   => 10,
        }
    }

    /// Radius within which this kind engages another agent.
    #[inline]
    pub const fn kill_distance(self) -> i32 {
        match self {
            AgentKind::Bear     => 10,
            AgentKind::Werewolf => 5,
            AgentKind::Bandit   => 10,
        }
    }

    /// The single kind this kind can kill.
    #[inline]
    pub const fn prey(self) -> AgentKind {
        match self {
            AgentKind::Bear     => AgentKind::Werewolf,
            AgentKind::Werewolf => AgentKind::Bandit,
            AgentKind::Bandit   => AgentKind::Bear,
        }
    }

    #[inline]
    pub fn can_kill(self, other: AgentKind) -> bool {
        self.prey() == other
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Bear     => "Bear",
            AgentKind::Werewolf => "Werewolf",
            AgentKind::Bandit   => "Bandit",
        }
    }

    /// First letter of the type name, as used in report listings.  Bear and
    /// Bandit share `B`; only the map tells them apart.
    pub fn initial(self) -> char {
        match self {
            AgentKind::Bear | AgentKind::Bandit => 'B',
            AgentKind::Werewolf                 => 'W',
        }
    }

    /// Single-character map symbol.
    pub fn symbol(self) -> char {
        match self {
            AgentKind::Bear     => 'B',
            AgentKind::Werewolf => 'W',
            AgentKind::Bandit   => 'R',
        }
    }

    /// Position in [`AgentKind::ALL`]; handy for per-kind counter arrays.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = FateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bear"     => Ok(AgentKind::Bear),
            "Werewolf" => Ok(AgentKind::Werewolf),
            "Bandit"   => Ok(AgentKind::Bandit),
            other      => Err(FateError::UnknownKind(other.to_owned())),
        }
    }
}
