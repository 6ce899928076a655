//! Global run counters and the point-in-time statistics view.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use fate_agent::Census;
use fate_battle::Resolution;
use fate_core::AgentKind;

/// Counters shared by every worker.  All relaxed: they are reported, never
/// used to synchronize.
#[derive(Debug, Default)]
pub struct SimStats {
    battles:        AtomicU64,
    kills:          AtomicU64,
    stale:          AtomicU64,
    movement_ticks: AtomicU64,
    elapsed_ms:     AtomicU64,
}

impl SimStats {
    /// Count one resolver outcome.  Only fought battles bump `battles`.
    pub fn record(&self, outcome: &Resolution) {
        match outcome {
            Resolution::Kill(_) => {
                self.battles.fetch_add(1, Ordering::Relaxed);
                self.kills.fetch_add(1, Ordering::Relaxed);
            }
            Resolution::Survived { .. } => {
                self.battles.fetch_add(1, Ordering::Relaxed);
            }
            Resolution::Stale | Resolution::NoDominance => {
                self.stale.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub(crate) fn record_movement_tick(&self) {
        self.movement_ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn set_elapsed(&self, elapsed: Duration) {
        let ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.elapsed_ms.store(ms, Ordering::Relaxed);
    }

    pub fn battles(&self) -> u64 {
        self.battles.load(Ordering::Relaxed)
    }

    pub fn kills(&self) -> u64 {
        self.kills.load(Ordering::Relaxed)
    }

    /// Tasks dropped without rolling dice.
    pub fn dropped(&self) -> u64 {
        self.stale.load(Ordering::Relaxed)
    }

    pub fn movement_ticks(&self) -> u64 {
        self.movement_ticks.load(Ordering::Relaxed)
    }

    /// Driver time elapsed so far.
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(Ordering::Relaxed))
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

/// Point-in-time view of a run, returned by
/// [`Sim::statistics`][crate::Sim::statistics].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statistics {
    pub elapsed:        Duration,
    pub battles:        u64,
    pub kills:          u64,
    pub dropped:        u64,
    pub movement_ticks: u64,
    pub queue_len:      usize,
    pub census:         Census,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== CURRENT STATISTICS ===")?;
        writeln!(f, "Time: {}s", self.elapsed.as_secs())?;
        writeln!(
            f,
            "Battles: {}  Kills: {}  Queue: {}",
            self.battles, self.kills, self.queue_len
        )?;
        writeln!(f)?;
        writeln!(f, "Alive: {}/{}", self.census.alive(), self.census.total())?;
        for kind in AgentKind::ALL {
            write!(
                f,
                "{}:{}/{}  ",
                kind.symbol(),
                self.census.alive_of(kind),
                self.census.dead_of(kind)
            )?;
        }
        writeln!(f)
    }
}
