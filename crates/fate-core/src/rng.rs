//! Seedable RNG wrapper and the dice abstraction.
//!
//! # Determinism strategy
//!
//! There are no global generators.  The run owns one root `SimRng` seeded
//! from `SimConfig::seed`; each worker thread receives its own child stream
//! derived with [`SimRng::child`]:
//!
//!   child_seed = parent.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio.
//! Placement is therefore reproducible for a fixed seed, while movement and
//! combat remain independent streams that never contend for a lock.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation RNG.  Owned by exactly one thread at a time.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Used when the run has no fixed seed.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Derive a child `SimRng` for another thread.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── Dice ──────────────────────────────────────────────────────────────────────

/// Source of die rolls for battle resolution.
///
/// The battle worker rolls through this trait so tests can script exact
/// outcomes with [`ScriptedDice`].
pub trait Dice {
    /// Roll one die with `sides` faces: uniform in `1..=sides`.
    /// Returns `0` for a zero-sided die.
    fn roll(&mut self, sides: u32) -> u32;

    /// One six-sided die.
    #[inline]
    fn roll_d6(&mut self) -> u32 {
        self.roll(6)
    }
}

impl Dice for SimRng {
    fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.0.gen_range(1..=sides)
    }
}

/// Replays a fixed sequence of rolls, cycling when exhausted.
///
/// An empty script rolls `1` forever.  Values are returned as given; they are
/// not clamped to `sides`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    script: Vec<u32>,
    cursor: usize,
    rolled: Vec<u32>,
}

impl ScriptedDice {
    pub fn new(script: impl Into<Vec<u32>>) -> Self {
        Self { script: script.into(), cursor: 0, rolled: Vec::new() }
    }

    /// Every value rolled so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = u32> + '_ {
        self.rolled.iter().copied()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, _sides: u32) -> u32 {
        let value = match self.script.get(self.cursor % self.script.len().max(1)) {
            Some(&v) => v,
            None     => 1,
        };
        self.cursor += 1;
        self.rolled.push(value);
        value
    }
}
