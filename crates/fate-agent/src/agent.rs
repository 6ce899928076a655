//! A single simulated agent.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use fate_core::{AgentId, AgentKind, GridBounds, GridPos, SimRng};

use crate::{AgentSnapshot, KillEvent, KillObserver};

/// Mutable fields that must be read together.
struct Body {
    name: String,
    pos:  GridPos,
}

/// One agent on the map.
///
/// Shared as `Arc<Agent>` between the roster, any pending battle task, and
/// the kill-event path.  Fields are split by how they are accessed:
///
/// - `kind` is immutable after construction.
/// - name and position sit behind one `Mutex` so a reader never sees a torn
///   `(x, y)` pair.
/// - `alive` is an `AtomicBool` read by every worker and written only by the
///   battle worker, at most once.
/// - subscribers are registered before the run starts and read on each kill.
pub struct Agent {
    pub(crate) id: AgentId,
    kind:          AgentKind,
    body:          Mutex<Body>,
    alive:         AtomicBool,
    kills:         AtomicU32,
    observers:     RwLock<Vec<Arc<dyn KillObserver>>>,
}

impl Agent {
    /// Unchecked constructor; public construction goes through
    /// [`create_agent`][crate::create_agent].
    pub(crate) fn new(kind: AgentKind, name: String, pos: GridPos) -> Self {
        Self {
            id:        AgentId::INVALID,
            kind,
            body:      Mutex::new(Body { name, pos }),
            alive:     AtomicBool::new(true),
            kills:     AtomicU32::new(0),
            observers: RwLock::new(Vec::new()),
        }
    }

    // Writes under `body` are plain assignments, so a poisoned lock still
    // guards consistent data.
    fn body(&self) -> MutexGuard<'_, Body> {
        self.body.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Identity ──────────────────────────────────────────────────────────

    /// Roster index.  `AgentId::INVALID` until the agent joins a roster.
    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn name(&self) -> String {
        self.body().name.clone()
    }

    pub fn position(&self) -> GridPos {
        self.body().pos
    }

    #[inline]
    pub fn move_distance(&self) -> i32 {
        self.kind.move_distance()
    }

    #[inline]
    pub fn kill_distance(&self) -> i32 {
        self.kind.kill_distance()
    }

    // ── Liveness ──────────────────────────────────────────────────────────

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Flip `alive` from `true` to `false`.
    ///
    /// Returns `true` only for the call that performed the transition; every
    /// later call is a no-op returning `false`.  There is no way back.
    pub fn kill(&self) -> bool {
        self.alive
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Kills credited to this agent.
    #[inline]
    pub fn kills(&self) -> u32 {
        self.kills.load(Ordering::Relaxed)
    }

    /// Credit one kill.  Returns the new total.
    pub fn record_kill(&self) -> u32 {
        self.kills.fetch_add(1, Ordering::Relaxed) + 1
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Displace by an independent uniform offset in `[-move, +move]` on each
    /// axis, then clamp into `bounds`.  Dead agents do not move.
    ///
    /// Returns `true` if the agent was alive and took a step.
    pub fn move_randomly(&self, rng: &mut SimRng, bounds: GridBounds) -> bool {
        if !self.is_alive() {
            return false;
        }
        let reach = self.move_distance();
        let dx = rng.gen_range(-reach..=reach);
        let dy = rng.gen_range(-reach..=reach);

        let mut body = self.body();
        body.pos = body.pos.offset_clamped(dx, dy, bounds);
        true
    }

    /// Force a position.  Used when restoring a snapshot and in tests.
    pub fn place(&self, pos: GridPos) {
        self.body().pos = pos;
    }

    // ── Combat predicates ─────────────────────────────────────────────────

    pub fn distance_to(&self, other: &Agent) -> f64 {
        // Read one body at a time: never hold two agent locks at once.
        let here = self.position();
        let there = other.position();
        here.distance(there)
    }

    /// `true` if the pair is within either agent's kill distance.
    pub fn in_kill_range(&self, other: &Agent) -> bool {
        let d = self.distance_to(other);
        d <= f64::from(self.kill_distance()) || d <= f64::from(other.kill_distance())
    }

    /// Dominance rule applied to the two agents' kinds.
    #[inline]
    pub fn can_kill(&self, other: &Agent) -> bool {
        self.kind.can_kill(other.kind)
    }

    // ── Notifications ─────────────────────────────────────────────────────

    pub fn add_observer(&self, observer: Arc<dyn KillObserver>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Deliver `event` to every subscriber registered right now.
    ///
    /// The subscriber list is copied out first so no lock is held while
    /// observer code runs.  Returns the number of subscribers notified.
    pub fn notify_kill(&self, event: &KillEvent) -> usize {
        let observers: Vec<Arc<dyn KillObserver>> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in &observers {
            observer.on_kill(event);
        }
        observers.len()
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    /// A consistent by-value copy of this agent's observable state.
    pub fn snapshot(&self) -> AgentSnapshot {
        let (name, pos) = {
            let body = self.body();
            (body.name.clone(), body.pos)
        };
        AgentSnapshot {
            id: self.id,
            kind: self.kind,
            name,
            pos,
            alive: self.is_alive(),
            kills: self.kills(),
        }
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self.body();
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("name", &body.name)
            .field("pos", &body.pos)
            .field("alive", &self.is_alive())
            .finish()
    }
}
