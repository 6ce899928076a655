//! Agent construction.
//!
//! All public construction funnels through [`create_agent`], which enforces
//! non-negative coordinates.  Agents leave the factory with
//! `AgentId::INVALID`; the roster assigns the real id.

use fate_core::{AgentKind, FateError, FateResult, GridBounds, GridPos, SimRng};

use crate::Agent;

/// Build an agent of `kind` at `(x, y)`.
///
/// # Errors
///
/// [`FateError::InvalidCoordinates`] if `x < 0` or `y < 0`.
pub fn create_agent(kind: AgentKind, name: impl Into<String>, x: i32, y: i32) -> FateResult<Agent> {
    if x < 0 || y < 0 {
        return Err(FateError::InvalidCoordinates { x, y });
    }
    Ok(Agent::new(kind, name.into(), GridPos::new(x, y)))
}

/// Like [`create_agent`] but keyed by type name (`"Bear"`, `"Werewolf"`,
/// `"Bandit"`), as read from a snapshot file.
///
/// # Errors
///
/// [`FateError::InvalidCoordinates`] for negative coordinates (checked
/// first), then [`FateError::UnknownKind`] for any other type name.
pub fn create_agent_named(
    type_name: &str,
    name:      impl Into<String>,
    x:         i32,
    y:         i32,
) -> FateResult<Agent> {
    if x < 0 || y < 0 {
        return Err(FateError::InvalidCoordinates { x, y });
    }
    let kind: AgentKind = type_name.parse()?;
    create_agent(kind, name, x, y)
}

/// Uniformly random kind.
pub fn random_kind(rng: &mut SimRng) -> AgentKind {
    AgentKind::ALL[rng.gen_range(0..AgentKind::ALL.len())]
}

/// A random kind at a uniformly random in-bounds cell, named
/// `<Kind>_<prefix>` (e.g. `Bear_NPC_7`).
pub fn create_random_agent(prefix: &str, bounds: GridBounds, rng: &mut SimRng) -> FateResult<Agent> {
    if bounds.is_empty() {
        return Err(FateError::Config(format!(
            "cannot place agents on a {}x{} map",
            bounds.width, bounds.height
        )));
    }
    let kind = random_kind(rng);
    let x = rng.gen_range(0..bounds.width);
    let y = rng.gen_range(0..bounds.height);
    create_agent(kind, format!("{kind}_{prefix}"), x, y)
}
