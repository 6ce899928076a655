//! Kill notifications.

use crate::AgentSnapshot;

/// One successful kill, passed to subscribers by reference.
///
/// Both sides are by-value snapshots taken at resolution time, so a
/// subscriber never holds a handle into the roster.  Use `killer.id` /
/// `victim.id` with [`Roster::get`][crate::Roster::get] for live state.
#[derive(Clone, Debug, PartialEq)]
pub struct KillEvent {
    pub killer:       AgentSnapshot,
    pub victim:       AgentSnapshot,
    pub attack_roll:  u32,
    pub defense_roll: u32,
}

impl KillEvent {
    /// `[KILL] <Type> <Name> killed <Type> <Name>`, the kill-log line format.
    pub fn log_line(&self) -> String {
        format!(
            "[KILL] {} {} killed {} {}",
            self.killer.kind, self.killer.name, self.victim.kind, self.victim.name
        )
    }
}

/// Subscriber to kill events.
///
/// Called synchronously on the battle worker thread, the only thread that
/// resolves battles.  Implementations must return promptly (every
/// millisecond spent here delays the next battle) and must be internally
/// synchronized: one instance is usually registered on every agent.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use fate_agent::{KillEvent, KillObserver};
///
/// #[derive(Default)]
/// struct Tally(AtomicUsize);
///
/// impl KillObserver for Tally {
///     fn on_kill(&self, _event: &KillEvent) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait KillObserver: Send + Sync {
    fn on_kill(&self, event: &KillEvent);
}

impl<F> KillObserver for F
where
    F: Fn(&KillEvent) + Send + Sync,
{
    fn on_kill(&self, event: &KillEvent) {
        self(event)
    }
}

/// A [`KillObserver`] that ignores every event.
pub struct NoopObserver;

impl KillObserver for NoopObserver {
    fn on_kill(&self, _event: &KillEvent) {}
}
