//! The `Sim` struct: shared state, worker lifecycle, and the run driver.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use fate_agent::{AgentSnapshot, KillObserver, Roster};
use fate_battle::{BattleQueue, BattleResolver, BattleTask, Resolution, ScanReport, scan};
use fate_core::{Dice, SimConfig, SimRng};

use crate::status::{StatusLine, render_map};
use crate::{FinalReport, SimError, SimResult, SimStats, Statistics, worker};

// ── Lifecycle ─────────────────────────────────────────────────────────────────

/// Where a [`Sim`] is in its lifecycle.
///
/// ```text
/// SimBuilder ──build──→ Initialized ──start──→ Running ──stop──→ Stopping → Stopped
///                            └──────────────────stop─────────────────────────↗
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimState {
    Initialized,
    Running,
    Stopping,
    Stopped,
}

// ── Shared state ──────────────────────────────────────────────────────────────

/// Everything the workers touch, behind one `Arc`.
pub(crate) struct Shared {
    pub config:   SimConfig,
    pub roster:   Roster,
    pub queue:    BattleQueue,
    pub stats:    SimStats,
    pub resolver: BattleResolver,
    running:      AtomicBool,
}

impl Shared {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// One movement tick: every living agent moves, then every pair is
    /// checked, all under a single write lock.
    pub fn movement_tick(&self, rng: &mut SimRng) -> SimResult<ScanReport> {
        let bounds = self.config.bounds();
        let report = {
            let agents = self.roster.write()?;
            for agent in agents.iter() {
                agent.move_randomly(rng, bounds);
            }
            scan(&agents, &self.queue)
        };
        if self.config.dedup_each_tick {
            let removed = self.queue.dedup();
            if removed > 0 {
                tracing::trace!(removed, "deduplicated battle queue");
            }
        }
        self.stats.record_movement_tick();
        Ok(report)
    }

    pub fn resolve<D: Dice + ?Sized>(&self, task: BattleTask, dice: &mut D) -> Resolution {
        // Counted before observers run, so a failing sink cannot skew the tally.
        let outcome = self.resolver.resolve_with(task, dice, |o| self.stats.record(o));
        if matches!(outcome, Resolution::Stale) {
            tracing::debug!("dropped stale battle task");
        }
        outcome
    }

    pub fn status_line(&self) -> SimResult<StatusLine> {
        Ok(StatusLine {
            elapsed:   self.stats.elapsed(),
            duration:  Duration::from_secs(self.config.duration_secs),
            census:    self.roster.census()?,
            battles:   self.stats.battles(),
            kills:     self.stats.kills(),
            queue_len: self.queue.len(),
        })
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// A battle simulation: a roster, a battle queue, and three worker threads.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  Dropping a running `Sim`
/// stops and joins its workers.
pub struct Sim {
    shared:  Arc<Shared>,
    rng:     SimRng,
    state:   SimState,
    workers: Vec<(&'static str, JoinHandle<SimResult<()>>)>,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, roster: Roster, rng: SimRng) -> Self {
        Self {
            shared: Arc::new(Shared {
                config,
                roster,
                queue:    BattleQueue::new(),
                stats:    SimStats::default(),
                resolver: BattleResolver::new(),
                running:  AtomicBool::new(false),
            }),
            rng,
            state: SimState::Initialized,
            workers: Vec::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.shared.config
    }

    pub fn roster(&self) -> &Roster {
        &self.shared.roster
    }

    pub fn queue(&self) -> &BattleQueue {
        &self.shared.queue
    }

    pub fn stats(&self) -> &SimStats {
        &self.shared.stats
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// Subscribe `observer` to every agent's kills.
    pub fn subscribe(&self, observer: Arc<dyn KillObserver>) -> SimResult<()> {
        Ok(self.shared.roster.subscribe_all(observer)?)
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Launch the movement, battle, and display workers.
    pub fn start(&mut self) -> SimResult<()> {
        if self.state != SimState::Initialized {
            return Err(SimError::InvalidState { op: "start", state: self.state });
        }
        self.shared.running.store(true, Ordering::Release);
        self.state = SimState::Running;

        let movement_rng = self.rng.child(1);
        let battle_rng = self.rng.child(2);

        let shared = Arc::clone(&self.shared);
        self.spawn("movement", move || worker::movement_loop(&shared, movement_rng))?;
        let shared = Arc::clone(&self.shared);
        self.spawn("battle", move || worker::battle_loop(&shared, battle_rng))?;
        let shared = Arc::clone(&self.shared);
        self.spawn("display", move || worker::display_loop(&shared))?;

        tracing::info!(
            agents = self.shared.roster.len(),
            duration_secs = self.shared.config.duration_secs,
            "simulation started"
        );
        Ok(())
    }

    fn spawn<F>(&mut self, name: &'static str, body: F) -> SimResult<()>
    where
        F: FnOnce() -> SimResult<()> + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name(format!("fate-{name}"))
            .spawn(body)?;
        self.workers.push((name, handle));
        Ok(())
    }

    /// Clear the running flag, stop the queue, join every worker, and drain
    /// whatever is left in the queue.
    ///
    /// Idempotent.  Returns the first worker failure, if any.
    pub fn stop(&mut self) -> SimResult<()> {
        if self.state == SimState::Stopped {
            return Ok(());
        }
        self.state = SimState::Stopping;
        self.shared.running.store(false, Ordering::Release);
        self.shared.queue.stop();

        let mut first: Option<SimError> = None;
        for (name, handle) in self.workers.drain(..) {
            let outcome = handle.join().unwrap_or(Err(SimError::WorkerPanicked(name)));
            if let Err(e) = outcome {
                tracing::error!(worker = name, error = %e, "worker failed");
                first.get_or_insert(e);
            }
        }

        let drained = self.shared.queue.clear();
        self.state = SimState::Stopped;
        tracing::info!(drained, "simulation stopped");
        first.map_or(Ok(()), Err)
    }

    /// Name of the first worker that has exited while the sim is still
    /// running.  Workers only return early on a fault.
    fn exited_worker(&self) -> Option<&'static str> {
        self.workers
            .iter()
            .find(|(_, handle)| handle.is_finished())
            .map(|&(name, _)| name)
    }

    /// Start if needed, wait out `duration_secs` in `driver_step` increments
    /// until `interrupt` is raised or a worker dies, then stop and report.
    pub fn run(&mut self, interrupt: &AtomicBool) -> SimResult<FinalReport> {
        if self.state == SimState::Initialized {
            self.start()?;
        }
        let total = Duration::from_secs(self.shared.config.duration_secs);
        let step = self.shared.config.driver_step;

        let mut waited = Duration::ZERO;
        while waited < total && self.state == SimState::Running {
            if interrupt.load(Ordering::Acquire) {
                tracing::info!(elapsed_secs = waited.as_secs(), "interrupt received");
                break;
            }
            if let Some(worker) = self.exited_worker() {
                tracing::error!(worker, elapsed_secs = waited.as_secs(), "worker exited early");
                break;
            }
            let nap = step.min(total - waited);
            thread::sleep(nap);
            waited += nap;
            self.shared.stats.set_elapsed(waited);
        }

        self.stop()?;
        self.report()
    }

    // ── Stepping (no worker threads) ──────────────────────────────────────

    /// Run one movement tick on the calling thread.
    pub fn movement_tick(&self, rng: &mut SimRng) -> SimResult<ScanReport> {
        self.shared.movement_tick(rng)
    }

    /// Resolve one task on the calling thread and count the outcome.
    pub fn resolve<D: Dice + ?Sized>(&self, task: BattleTask, dice: &mut D) -> Resolution {
        self.shared.resolve(task, dice)
    }

    /// Pop one task (waiting at most `timeout`) and resolve it.
    pub fn battle_step<D: Dice + ?Sized>(
        &self,
        dice:    &mut D,
        timeout: Duration,
    ) -> Option<Resolution> {
        let task = self.shared.queue.pop_timeout(timeout)?;
        Some(self.shared.resolve(task, dice))
    }

    // ── Views ─────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> SimResult<Vec<AgentSnapshot>> {
        Ok(self.shared.roster.snapshot()?)
    }

    pub fn statistics(&self) -> SimResult<Statistics> {
        let stats = &self.shared.stats;
        Ok(Statistics {
            elapsed:        stats.elapsed(),
            battles:        stats.battles(),
            kills:          stats.kills(),
            dropped:        stats.dropped(),
            movement_ticks: stats.movement_ticks(),
            queue_len:      self.shared.queue.len(),
            census:         self.shared.roster.census()?,
        })
    }

    /// The current progress line, without cursor control.
    pub fn status_line(&self) -> SimResult<String> {
        Ok(self.shared.status_line()?.render())
    }

    /// ASCII mini-map of the living agents.
    pub fn map(&self) -> SimResult<String> {
        Ok(render_map(&self.snapshot()?, self.shared.config.bounds()))
    }

    /// Summary built from one roster snapshot.
    pub fn report(&self) -> SimResult<FinalReport> {
        let agents = self.snapshot()?;
        let stats = &self.shared.stats;
        Ok(FinalReport::new(
            stats.elapsed(),
            stats.battles(),
            stats.kills(),
            stats.dropped(),
            &agents,
        ))
    }
}

impl Drop for Sim {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::warn!(error = %e, "error while stopping simulation on drop");
        }
    }
}
