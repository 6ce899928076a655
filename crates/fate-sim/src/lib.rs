//! `fate-sim` — worker threads and lifecycle for the fate battle simulation.
//!
//! # Threads
//!
//! ```text
//! driver (caller of Sim::run)
//!   sleeps driver_step until duration_secs or interrupt, then Sim::stop
//!
//! movement   every movement_interval:
//!              roster write lock → move all living agents → scan all pairs
//!              → push BattleTasks
//! battle     pop_timeout(battle_poll_timeout) → resolve → pause
//! display    every display_interval: census under read lock → `\r` status line
//! ```
//!
//! `Sim::stop` clears the shared running flag, stops the queue (waking the
//! battle worker), joins all three threads, and drains the queue.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::atomic::AtomicBool;
//! use fate_core::SimConfig;
//! use fate_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let report = sim.run(&AtomicBool::new(false))?;
//! println!("{report}");
//! ```

pub mod builder;
pub mod error;
pub mod report;
pub mod sim;
pub mod stats;
pub mod status;
mod worker;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use report::FinalReport;
pub use sim::{Sim, SimState};
pub use stats::{SimStats, Statistics};
pub use status::{StatusLine, render_map};
