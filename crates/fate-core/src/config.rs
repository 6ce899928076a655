//! Run configuration.

use std::time::Duration;

use crate::{FateError, FateResult, GridBounds};

/// Top-level simulation configuration.
///
/// `Default` reproduces the standard run: 50 agents on a 100×100 map for
/// 30 seconds, movement at 10 ticks/s, status line once per second.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    pub map_width:  i32,
    pub map_height: i32,

    /// Number of randomly placed agents created at initialization.
    pub agent_count: usize,

    /// Wall-clock run length in seconds.
    pub duration_secs: u64,

    /// Master seed.  `None` seeds from OS entropy (non-reproducible run).
    pub seed: Option<u64>,

    /// Target period of the movement + collision tick.
    pub movement_interval: Duration,

    /// How long the battle worker waits on the queue before re-checking the
    /// running flag.
    pub battle_poll_timeout: Duration,

    /// Pause after each battle-worker iteration.
    pub battle_pause: Duration,

    /// Period of the status-line refresh.
    pub display_interval: Duration,

    /// Granularity of the driver's duration wait.  One second in production;
    /// tests shorten it.
    pub driver_step: Duration,

    /// Render the `\r` progress line to stderr.
    pub status_line: bool,

    /// Collapse symmetric duplicate battle tasks after every movement tick.
    pub dedup_each_tick: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            map_width:           100,
            map_height:          100,
            agent_count:         50,
            duration_secs:       30,
            seed:                None,
            movement_interval:   Duration::from_millis(100),
            battle_poll_timeout: Duration::from_millis(50),
            battle_pause:        Duration::from_millis(10),
            display_interval:    Duration::from_secs(1),
            driver_step:         Duration::from_secs(1),
            status_line:         true,
            dedup_each_tick:     false,
        }
    }
}

impl SimConfig {
    #[inline]
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.map_width, self.map_height)
    }

    /// Reject configurations the workers cannot run with.
    pub fn validate(&self) -> FateResult<()> {
        if self.bounds().is_empty() {
            return Err(FateError::Config(format!(
                "map must be at least 1x1, got {}x{}",
                self.map_width, self.map_height
            )));
        }
        let intervals = [
            ("movement_interval",   self.movement_interval),
            ("battle_poll_timeout", self.battle_poll_timeout),
            ("display_interval",    self.display_interval),
            ("driver_step",         self.driver_step),
        ];
        for (name, value) in intervals {
            if value.is_zero() {
                return Err(FateError::Config(format!("{name} must be non-zero")));
            }
        }
        Ok(())
    }
}
