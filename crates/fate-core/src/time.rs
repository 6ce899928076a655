//! Worker tick counting and wall-clock pacing.
//!
//! # Pacing policy
//!
//! Every periodic worker measures its own loop body and sleeps for whatever
//! is left of its budget.  A body that overruns gets no sleep and no credit:
//! the next tick starts immediately and the lost time is never caught up.
//! Under load the loop simply runs slower than its target rate.

use std::fmt;
use std::time::{Duration, Instant};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A per-worker iteration counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickPacer ─────────────────────────────────────────────────────────────────

/// Holds a loop to a target interval without catch-up bursts.
#[derive(Clone, Debug)]
pub struct TickPacer {
    budget:   Duration,
    tick:     Tick,
    overruns: u64,
}

impl TickPacer {
    pub fn new(budget: Duration) -> Self {
        Self { budget, tick: Tick::ZERO, overruns: 0 }
    }

    /// Ticks completed so far.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Ticks whose body took longer than the budget.
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Time left to sleep for a tick that began at `started`, or `None` if
    /// the body already used the whole budget.
    pub fn remaining(&self, started: Instant) -> Option<Duration> {
        self.budget.checked_sub(started.elapsed()).filter(|d| !d.is_zero())
    }

    /// Close out a tick that began at `started`: sleep off the rest of the
    /// budget, or record an overrun and return immediately.
    pub fn finish_tick(&mut self, started: Instant) {
        self.tick = self.tick.next();
        match self.remaining(started) {
            Some(rest) => std::thread::sleep(rest),
            None       => self.overruns += 1,
        }
    }
}
