//! End-of-run summary.

use std::fmt;
use std::time::Duration;

use fate_agent::{AgentSnapshot, Census};
use fate_core::AgentKind;

/// How many survivors the report lists by name.
pub const TOP_SURVIVORS: usize = 10;

/// Summary of a finished run, built from one stable roster snapshot.
#[derive(Clone, Debug)]
pub struct FinalReport {
    pub duration:  Duration,
    pub battles:   u64,
    pub kills:     u64,
    pub dropped:   u64,
    pub census:    Census,
    /// Living agents in roster order.
    pub survivors: Vec<AgentSnapshot>,
}

impl FinalReport {
    pub fn new(
        duration: Duration,
        battles:  u64,
        kills:    u64,
        dropped:  u64,
        agents:   &[AgentSnapshot],
    ) -> Self {
        Self {
            duration,
            battles,
            kills,
            dropped,
            census: Census::from_snapshots(agents),
            survivors: agents.iter().filter(|a| a.alive).cloned().collect(),
        }
    }

    /// Percentage of all agents still alive; `0.0` for an empty roster.
    pub fn survival_rate(&self) -> f64 {
        percent(self.census.alive(), self.census.total())
    }

    /// Percentage of `kind` still alive; `0.0` if none were created.
    pub fn survival_rate_of(&self, kind: AgentKind) -> f64 {
        let alive = self.census.alive_of(kind);
        percent(alive, alive + self.census.dead_of(kind))
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 * 100.0 / whole as f64 }
}

impl fmt::Display for FinalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(50);
        let light = "-".repeat(30);

        writeln!(f, "{heavy}")?;
        writeln!(f, "           FINAL REPORT")?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Duration: {} seconds", self.duration.as_secs())?;
        writeln!(f, "Battles:  {}", self.battles)?;
        writeln!(f, "Kills:    {}", self.kills)?;
        writeln!(f)?;
        writeln!(
            f,
            "Survivors: {}/{} ({:.1}%)",
            self.census.alive(),
            self.census.total(),
            self.survival_rate()
        )?;
        writeln!(f, "{light}")?;
        writeln!(f, "Type      Alive/Dead  Survival")?;
        for kind in AgentKind::ALL {
            writeln!(
                f,
                "{:<8}{:>4}/{:>4}{:>10.1}%",
                kind.as_str(),
                self.census.alive_of(kind),
                self.census.dead_of(kind),
                self.survival_rate_of(kind)
            )?;
        }
        writeln!(f, "{heavy}")?;
        writeln!(f)?;
        writeln!(f, "Top {TOP_SURVIVORS} Survivors:")?;
        writeln!(f, "{light}")?;
        for (i, s) in self.survivors.iter().take(TOP_SURVIVORS).enumerate() {
            writeln!(f, "{}. {} {} at ({},{})", i + 1, s.kind.initial(), s.name, s.pos.x, s.pos.y)?;
        }
        match self.survivors.len() {
            0 => writeln!(f, "No survivors!"),
            n if n > TOP_SURVIVORS => writeln!(f, "... and {} more", n - TOP_SURVIVORS),
            _ => Ok(()),
        }
    }
}
