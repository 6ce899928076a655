//! `fate-output` — where kills and rosters leave the process.
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`observer`]   | `ConsoleObserver` (stdout), `FileObserver` (append-only)   |
//! | [`snapshot`]   | Space-separated roster snapshots: write, read, rebuild     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use fate_output::{ConsoleObserver, FileObserver};
//!
//! let log = Arc::new(FileObserver::open("log.txt")?);
//! let mut sim = SimBuilder::new(config)
//!     .observer(Arc::new(ConsoleObserver::new()))
//!     .observer(log.clone())
//!     .build()?;
//! sim.run(&interrupt)?;
//! log.take_error().map(|e| eprintln!("kill log error: {e}"));
//! ```

pub mod error;
pub mod observer;
pub mod snapshot;


pub use error::{OutputError, OutputResult};
pub use observer::{ConsoleObserver, DEFAULT_LOG_PATH, FileObserver};
pub use snapshot::{SnapshotRow, SnapshotWriter, load_snapshot, read_rows, save_snapshot};
