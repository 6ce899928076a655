//! `fate-agent` — agents and the shared roster for the `fate` simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent` (two-tier synchronized per-agent state)           |
//! | [`roster`]      | `Roster` (reader/writer-locked agent list), `Census`      |
//! | [`factory`]     | Type-keyed and random agent construction                  |
//! | [`builder`]     | `RosterBuilder` (fluent construction + observer wiring)   |
//! | [`observer`]    | `KillObserver` trait, `KillEvent`                         |
//! | [`snapshot`]    | `AgentSnapshot` value type                                |
//!
//! # Locking model
//!
//! ```text
//! Roster ── RwLock<Vec<Arc<Agent>>>       structure + "one tick at a time"
//!   Agent ── Mutex<{ name, position }>    pair-consistent reads of (x, y)
//!         ── AtomicBool alive             lock-free, monotone true → false
//!         ── AtomicU32 kills
//! ```
//!
//! No per-agent lock is ever held while calling into another component.

pub mod agent;
pub mod builder;
pub mod factory;
pub mod observer;
pub mod roster;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use builder::RosterBuilder;
pub use factory::{create_agent, create_agent_named, create_random_agent, random_kind};
pub use observer::{KillEvent, KillObserver, NoopObserver};
pub use roster::{Census, Roster};
pub use snapshot::AgentSnapshot;
