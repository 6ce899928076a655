//! The hand-off between the movement and battle workers.
//!
//! # Protocol
//!
//! | Operation        | Behaviour                                                  |
//! |------------------|------------------------------------------------------------|
//! | `push`           | append, wake one waiting consumer                          |
//! | `pop`            | block until a task arrives or the queue is stopped         |
//! | `pop_timeout`    | as `pop`, but also gives up after `timeout`                |
//! | `stop`           | clear `running`, wake every waiter; tasks stay queued      |
//! | `clear`          | drop every pending task                                    |
//! | `dedup`          | collapse tasks sharing an unordered agent pair             |
//!
//! A stopped queue still hands out whatever it holds: consumers see `None`
//! only once it is both stopped and empty.  Pushing after `stop` is allowed
//! and is drained the same way.

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::BattleTask;

/// Thread-safe FIFO of [`BattleTask`]s.
pub struct BattleQueue {
    tasks:     Mutex<VecDeque<BattleTask>>,
    available: Condvar,
    running:   AtomicBool,
}

impl Default for BattleQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleQueue {
    pub fn new() -> Self {
        Self {
            tasks:     Mutex::new(VecDeque::new()),
            available: Condvar::new(),
            running:   AtomicBool::new(true),
        }
    }

    // Every critical section is a single VecDeque call, so a poisoned lock
    // still guards a well-formed queue.
    fn lock(&self) -> MutexGuard<'_, VecDeque<BattleTask>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn waiting(&self, tasks: &VecDeque<BattleTask>) -> bool {
        tasks.is_empty() && self.running.load(Ordering::Acquire)
    }

    pub fn push(&self, task: BattleTask) {
        self.lock().push_back(task);
        self.available.notify_one();
    }

    /// Blocking dequeue.  `None` only once the queue is stopped and empty.
    pub fn pop(&self) -> Option<BattleTask> {
        let guard = self.lock();
        let mut tasks = self
            .available
            .wait_while(guard, |t| self.waiting(t))
            .unwrap_or_else(PoisonError::into_inner);
        tasks.pop_front()
    }

    /// Dequeue, waiting at most `timeout`.
    ///
    /// `None` on timeout, or once the queue is stopped and empty.  A timeout
    /// consumes nothing.
    pub fn pop_timeout(&self, timeout: Duration) -> Option<BattleTask> {
        let guard = self.lock();
        let (mut tasks, _timed_out) = self
            .available
            .wait_timeout_while(guard, timeout, |t| self.waiting(t))
            .unwrap_or_else(PoisonError::into_inner);
        tasks.pop_front()
    }

    /// Stop accepting waits: every blocked and future `pop` returns as soon as
    /// the queue is empty.  Pending tasks are kept.
    pub fn stop(&self) {
        {
            // Flip the flag under the lock so a consumer between its predicate
            // check and its wait cannot miss the wake-up.
            let _tasks = self.lock();
            self.running.store(false, Ordering::Release);
        }
        self.available.notify_all();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Drop every pending task.  Returns how many were discarded.
    pub fn clear(&self) -> usize {
        let mut tasks = self.lock();
        let n = tasks.len();
        tasks.clear();
        n
    }

    /// Pending task count.  Stale as soon as it returns.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Keep only the first pending task for each unordered agent pair,
    /// preserving the FIFO order of the survivors.  Returns how many tasks
    /// were removed.
    ///
    /// Never called implicitly; see `SimConfig::dedup_each_tick`.
    pub fn dedup(&self) -> usize {
        let mut tasks = self.lock();
        let before = tasks.len();
        let mut seen = HashSet::with_capacity(before);
        tasks.retain(|task| seen.insert(task.pair_key()));
        before - tasks.len()
    }
}
