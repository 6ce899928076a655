//! Roster snapshot files.
//!
//! One record per agent, space-separated, no header:
//!
//! ```text
//! Bear Bear_NPC_1 12 40 1
//! Bandit Bandit_NPC_2 3 97 0
//! ```
//!
//! Fields are `<Type> <Name> <x> <y> <alive>` with `alive` as `1` or `0`.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};

use fate_agent::{Agent, AgentSnapshot, create_agent_named};

use crate::{OutputError, OutputResult};

/// One record of a snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub kind:  String,
    pub name:  String,
    pub x:     i32,
    pub y:     i32,
    pub alive: u8,
}

impl From<&AgentSnapshot> for SnapshotRow {
    fn from(s: &AgentSnapshot) -> Self {
        Self {
            kind:  s.kind.as_str().to_owned(),
            name:  s.name.clone(),
            x:     s.pos.x,
            y:     s.pos.y,
            alive: u8::from(s.alive),
        }
    }
}

impl SnapshotRow {
    /// Rebuild the agent this row describes.  A `0` alive flag yields a dead
    /// agent.
    pub fn to_agent(&self) -> fate_core::FateResult<Agent> {
        let agent = create_agent_named(&self.kind, &self.name, self.x, self.y)?;
        if self.alive == 0 {
            agent.kill();
        }
        Ok(agent)
    }
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Writes snapshot records to any `io::Write`.
pub struct SnapshotWriter<W: io::Write> {
    inner:    csv::Writer<W>,
    records:  u64,
    finished: bool,
}

impl SnapshotWriter<File> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(File::create(path)?))
    }
}

impl<W: io::Write> SnapshotWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        let inner = WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .from_writer(writer);
        Self { inner, records: 0, finished: false }
    }

    pub fn write_agents(&mut self, agents: &[AgentSnapshot]) -> OutputResult<()> {
        for agent in agents {
            self.inner.serialize(SnapshotRow::from(agent))?;
            self.records += 1;
        }
        Ok(())
    }

    /// Records written so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Flush the underlying writer.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}

/// Write `agents` to a new file at `path`.  Returns the record count.
pub fn save_snapshot(path: &Path, agents: &[AgentSnapshot]) -> OutputResult<u64> {
    let mut writer = SnapshotWriter::create(path)?;
    writer.write_agents(agents)?;
    writer.finish()?;
    tracing::info!(path = %path.display(), records = writer.records(), "snapshot saved");
    Ok(writer.records())
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// Parse every record from `reader`.
pub fn read_rows<R: io::Read>(reader: R) -> OutputResult<Vec<SnapshotRow>> {
    ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_reader(reader)
        .deserialize::<SnapshotRow>()
        .map(|row| row.map_err(OutputError::from))
        .collect()
}

/// Load a snapshot file and rebuild its agents in file order.
///
/// Fails on the first record with an unknown type or negative coordinates.
pub fn load_snapshot(path: &Path) -> OutputResult<Vec<Agent>> {
    let rows = read_rows(File::open(path)?)?;
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row.to_agent()
                .map_err(|source| OutputError::Record { record: i as u64 + 1, source })
        })
        .collect()
}
