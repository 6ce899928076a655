//! The three worker loops.  Each runs on its own named thread until the
//! shared `running` flag drops, and returns the first fault it hits.

use std::io::Write;
use std::thread;
use std::time::Instant;

use fate_core::{SimRng, TickPacer};

use crate::SimResult;
use crate::sim::Shared;

/// Move every living agent, then scan for engagements, once per
/// `movement_interval`.
pub(crate) fn movement_loop(shared: &Shared, mut rng: SimRng) -> SimResult<()> {
    tracing::info!("movement worker started");
    let mut pacer = TickPacer::new(shared.config.movement_interval);
    while shared.is_running() {
        let started = Instant::now();
        shared.movement_tick(&mut rng)?;
        pacer.finish_tick(started);
    }
    tracing::info!(
        ticks = pacer.tick().0,
        overruns = pacer.overruns(),
        "movement worker stopped"
    );
    Ok(())
}

/// Resolve queued battles one at a time.
pub(crate) fn battle_loop(shared: &Shared, mut dice: SimRng) -> SimResult<()> {
    tracing::info!("battle worker started");
    let poll = shared.config.battle_poll_timeout;
    let pause = shared.config.battle_pause;
    while shared.is_running() {
        if let Some(task) = shared.queue.pop_timeout(poll) {
            shared.resolve(task, &mut dice);
        }
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }
    tracing::info!(
        battles = shared.stats.battles(),
        kills = shared.stats.kills(),
        "battle worker stopped"
    );
    Ok(())
}

/// Redraw the status line once per `display_interval`.
pub(crate) fn display_loop(shared: &Shared) -> SimResult<()> {
    tracing::info!("display worker started");
    let mut pacer = TickPacer::new(shared.config.display_interval);
    let draw = shared.config.status_line;
    while shared.is_running() {
        let started = Instant::now();
        let line = shared.status_line()?.render();
        if draw {
            let mut err = std::io::stderr().lock();
            if let Err(e) = write!(err, "\r{line}").and_then(|()| err.flush()) {
                tracing::warn!(error = %e, "status line write failed");
            }
        }
        pacer.finish_tick(started);
    }
    if draw {
        eprintln!();
    }
    tracing::info!("display worker stopped");
    Ok(())
}
