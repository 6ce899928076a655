//! Kill-log sinks: one line per kill, to stdout or to an append-only file.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use fate_agent::{KillEvent, KillObserver};

use crate::{OutputError, OutputResult};

/// Where the binary writes the kill log unless told otherwise.
pub const DEFAULT_LOG_PATH: &str = "log.txt";

/// Prints each kill line to stdout.
///
/// Holds the stdout lock for the whole line so kill lines from different
/// threads never interleave.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    pub fn new() -> Self {
        Self
    }
}

impl KillObserver for ConsoleObserver {
    fn on_kill(&self, event: &KillEvent) {
        let mut out = io::stdout().lock();
        // Newline first: the status line on stderr may have left the cursor
        // mid-row.
        if let Err(e) = writeln!(out, "\n{}", event.log_line()) {
            tracing::warn!(error = %e, "failed to print kill line");
        }
    }
}

// ── FileObserver ──────────────────────────────────────────────────────────────

struct LogFile {
    writer:     BufWriter<File>,
    lines:      u64,
    last_error: Option<OutputError>,
}

/// Appends each kill line to a file, flushing after every line.
///
/// `on_kill` cannot fail, so write errors are stored and logged; retrieve
/// the first one with [`take_error`][Self::take_error].
pub struct FileObserver {
    path: PathBuf,
    file: Mutex<LogFile>,
}

impl FileObserver {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> OutputResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(LogFile {
                writer:     BufWriter::new(file),
                lines:      0,
                last_error: None,
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LogFile> {
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lines successfully written by this observer.
    pub fn lines_written(&self) -> u64 {
        self.lock().lines
    }

    /// Take the first stored write error, if any.
    pub fn take_error(&self) -> Option<OutputError> {
        self.lock().last_error.take()
    }

    /// Flush buffered output.
    pub fn flush(&self) -> OutputResult<()> {
        Ok(self.lock().writer.flush()?)
    }
}

impl KillObserver for FileObserver {
    fn on_kill(&self, event: &KillEvent) {
        let mut log = self.lock();
        let result = writeln!(log.writer, "{}", event.log_line()).and_then(|()| log.writer.flush());
        match result {
            Ok(()) => log.lines += 1,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "kill log write failed");
                // Keep only the first error.
                if log.last_error.is_none() {
                    log.last_error = Some(e.into());
                }
            }
        }
    }
}

impl std::fmt::Debug for FileObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileObserver").field("path", &self.path).finish()
    }
}
