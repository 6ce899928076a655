//! `fate-core` — foundational types for the `fate` battle simulation.
//!
//! This crate is a dependency of every other `fate-*` crate.  It has no
//! `fate-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`grid`]        | `GridPos`, `GridBounds`, Euclidean distance           |
//! | [`kind`]        | `AgentKind` and the cyclic dominance rule             |
//! | [`time`]        | `Tick`, `TickPacer`                                   |
//! | [`rng`]         | `SimRng`, the `Dice` trait, `ScriptedDice`            |
//! | [`config`]      | `SimConfig`                                           |
//! | [`error`]       | `FateError`, `FateResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{FateError, FateResult};
pub use grid::{GridBounds, GridPos};
pub use ids::AgentId;
pub use kind::AgentKind;
pub use rng::{Dice, ScriptedDice, SimRng};
pub use time::{Tick, TickPacer};
