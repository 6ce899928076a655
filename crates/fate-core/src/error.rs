//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `FateError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `fate-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FateError {
    #[error("coordinates must be non-negative, got ({x}, {y})")]
    InvalidCoordinates { x: i32, y: i32 },

    #[error("unknown agent type: {0:?}")]
    UnknownKind(String),

    /// Roster slot `{0}` has no representable [`AgentId`].
    #[error("roster slot {0} exceeds the agent id range")]
    RosterFull(usize),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    /// A thread panicked while holding the named lock.
    #[error("{0} lock poisoned")]
    Poisoned(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `fate-*` crates.
pub type FateResult<T> = Result<T, FateError>;
