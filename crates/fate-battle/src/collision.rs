//! Pairwise collision scan.
//!
//! Called once per movement tick, with the roster write lock held, after
//! every agent has moved.  Each unordered pair of living agents is checked
//! once; a pair in range where one side dominates the other becomes a
//! [`BattleTask`] with the dominant agent as attacker.

use std::sync::Arc;

use fate_agent::Agent;
use fate_core::GridPos;

use crate::{BattleQueue, BattleTask};

/// Counters from one [`scan`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Unordered living pairs examined.
    pub pairs_checked: usize,
    /// Pairs within either agent's kill distance.
    pub in_range:      usize,
    /// Tasks pushed onto the queue.
    pub enqueued:      usize,
}

/// Build the task for a single pair, if it is a legal engagement.
///
/// `None` when either agent is dead, the pair is out of range, or neither
/// kind dominates the other.
pub fn engagement(a: &Arc<Agent>, b: &Arc<Agent>) -> Option<BattleTask> {
    if !a.is_alive() || !b.is_alive() {
        return None;
    }
    let d = a.distance_to(b);
    if !within_reach(d, a, b) {
        return None;
    }
    attacker_defender(a, b).map(|(att, def)| BattleTask::new(att, def, d))
}

/// Check every unordered pair of living agents and enqueue the engagements.
pub fn scan(agents: &[Arc<Agent>], queue: &BattleQueue) -> ScanReport {
    // One position read per agent rather than two per pair.
    let positions: Vec<Option<GridPos>> = agents
        .iter()
        .map(|a| a.is_alive().then(|| a.position()))
        .collect();

    let mut report = ScanReport::default();
    for i in 0..agents.len() {
        let Some(pi) = positions[i] else { continue };
        for j in (i + 1)..agents.len() {
            let Some(pj) = positions[j] else { continue };
            report.pairs_checked += 1;

            let (a, b) = (&agents[i], &agents[j]);
            let d = pi.distance(pj);
            if !within_reach(d, a, b) {
                continue;
            }
            report.in_range += 1;

            if let Some((att, def)) = attacker_defender(a, b) {
                queue.push(BattleTask::new(att, def, d));
                report.enqueued += 1;
            }
        }
    }

    if report.enqueued > 0 {
        tracing::trace!(
            pairs = report.pairs_checked,
            in_range = report.in_range,
            enqueued = report.enqueued,
            "collision scan"
        );
    }
    report
}

#[inline]
fn within_reach(d: f64, a: &Agent, b: &Agent) -> bool {
    d <= f64::from(a.kill_distance()) || d <= f64::from(b.kill_distance())
}

fn attacker_defender(a: &Arc<Agent>, b: &Arc<Agent>) -> Option<(Arc<Agent>, Arc<Agent>)> {
    if a.can_kill(b) {
        Some((Arc::clone(a), Arc::clone(b)))
    } else if b.can_kill(a) {
        Some((Arc::clone(b), Arc::clone(a)))
    } else {
        None
    }
}
