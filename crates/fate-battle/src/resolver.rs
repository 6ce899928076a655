//! Battle resolution: one task in, at most one death out.
//!
//! # Task lifecycle
//!
//! ```text
//! Dequeued ── either side dead ───────────────────────────→ Stale
//!    │
//!    ├─ neither kind dominates ───────────────────────────→ NoDominance
//!    │
//!    └─ roll d6 attacker, roll d6 defender
//!         ├─ attack > defense → defender.kill() → Kill(event)
//!         └─ otherwise ──────────────────────────→ Survived
//! ```
//!
//! Ties go to the defender.  Nothing here re-checks distance: the agents may
//! have moved apart while the task sat in the queue and the fight still
//! happens.

use std::sync::Arc;

use fate_agent::{Agent, KillEvent};
use fate_core::Dice;

use crate::BattleTask;

/// Outcome of resolving one [`BattleTask`].
#[derive(Clone, Debug)]
pub enum Resolution {
    /// The defender died.  The event has already been delivered.
    Kill(KillEvent),
    /// Dice were rolled and the defender held.
    Survived { attack_roll: u32, defense_roll: u32 },
    /// One side was already dead when the task was dequeued.
    Stale,
    /// Neither agent can kill the other; no dice rolled.
    NoDominance,
}

impl Resolution {
    /// `true` if dice were rolled.
    pub fn was_fought(&self) -> bool {
        matches!(self, Resolution::Kill(_) | Resolution::Survived { .. })
    }

    pub fn is_kill(&self) -> bool {
        matches!(self, Resolution::Kill(_))
    }
}

/// The attacker needs a strictly higher roll.
#[inline]
pub fn attacker_wins(attack_roll: u32, defense_roll: u32) -> bool {
    attack_roll > defense_roll
}

/// Stateless battle resolver.
#[derive(Copy, Clone, Debug, Default)]
pub struct BattleResolver;

impl BattleResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve<D: Dice + ?Sized>(&self, task: BattleTask, dice: &mut D) -> Resolution {
        self.resolve_with(task, dice, |_| {})
    }

    /// Like [`resolve`](Self::resolve), but hands the outcome to `tally`
    /// before any kill observer runs.  A panicking observer then cannot leave
    /// a death uncounted.
    pub fn resolve_with<D, F>(&self, task: BattleTask, dice: &mut D, tally: F) -> Resolution
    where
        D: Dice + ?Sized,
        F: FnOnce(&Resolution),
    {
        let (outcome, killer) = self.decide(task, dice);
        tally(&outcome);
        if let (Resolution::Kill(event), Some(killer)) = (&outcome, killer) {
            killer.notify_kill(event);
        }
        outcome
    }

    fn decide<D: Dice + ?Sized>(
        &self,
        task: BattleTask,
        dice: &mut D,
    ) -> (Resolution, Option<Arc<Agent>>) {
        let BattleTask { mut attacker, mut defender, .. } = task;

        if !attacker.is_alive() || !defender.is_alive() {
            return (Resolution::Stale, None);
        }

        if !attacker.can_kill(&defender) {
            if defender.can_kill(&attacker) {
                std::mem::swap(&mut attacker, &mut defender);
            } else {
                return (Resolution::NoDominance, None);
            }
        }

        let attack_roll = dice.roll_d6();
        let defense_roll = dice.roll_d6();

        if !attacker_wins(attack_roll, defense_roll) {
            tracing::debug!(
                attacker = %attacker.id(),
                defender = %defender.id(),
                attack_roll,
                defense_roll,
                "defender survived"
            );
            return (Resolution::Survived { attack_roll, defense_roll }, None);
        }

        // Another resolver may have got here first.
        if !defender.kill() {
            return (Resolution::Stale, None);
        }
        attacker.record_kill();

        let event = KillEvent {
            killer: attacker.snapshot(),
            victim: defender.snapshot(),
            attack_roll,
            defense_roll,
        };
        tracing::debug!(
            killer = %event.killer.name,
            victim = %event.victim.name,
            attack_roll,
            defense_roll,
            "kill"
        );
        (Resolution::Kill(event), Some(attacker))
    }
}
