//! Text renderings of a running simulation: the one-line progress bar and
//! the downscaled ASCII map.

use std::fmt::Write as _;
use std::time::Duration;

use fate_agent::{AgentSnapshot, Census};
use fate_core::{AgentKind, GridBounds};

/// Width of the progress bar, in cells.
pub const BAR_WIDTH: u64 = 40;

/// Mini-map dimensions.
pub const MAP_COLS: usize = 40;
pub const MAP_ROWS: usize = 10;

/// Inputs for one status line.
#[derive(Copy, Clone, Debug)]
pub struct StatusLine {
    pub elapsed:   Duration,
    pub duration:  Duration,
    pub census:    Census,
    pub battles:   u64,
    pub kills:     u64,
    pub queue_len: usize,
}

impl StatusLine {
    /// Filled cells of the progress bar, capped at [`BAR_WIDTH`].
    pub fn progress(&self) -> u64 {
        let total = self.duration.as_secs();
        if total == 0 {
            return 0;
        }
        (self.elapsed.as_secs() * BAR_WIDTH / total).min(BAR_WIDTH)
    }

    /// `[====....]  3s/ 30s Live: 48/ 50 Br:16 Ww:15 Bd:17 Bat:  4 Kil: 2 Que:  0`
    ///
    /// No leading `\r`; the caller owns cursor control.
    pub fn render(&self) -> String {
        let filled = self.progress() as usize;
        let mut line = String::with_capacity(128);
        line.push('[');
        line.extend(std::iter::repeat_n('=', filled));
        line.extend(std::iter::repeat_n('.', BAR_WIDTH as usize - filled));
        let _ = write!(
            line,
            "] {:>3}s/{:>3}s Live:{:>3}/{:>3} Br:{:>2} Ww:{:>2} Bd:{:>2} Bat:{:>3} Kil:{:>2} Que:{:>3}",
            self.elapsed.as_secs(),
            self.duration.as_secs(),
            self.census.alive(),
            self.census.total(),
            self.census.alive_of(AgentKind::Bear),
            self.census.alive_of(AgentKind::Werewolf),
            self.census.alive_of(AgentKind::Bandit),
            self.battles,
            self.kills,
            self.queue_len,
        );
        line
    }
}

/// Downscale living agents onto a [`MAP_COLS`]×[`MAP_ROWS`] grid.
///
/// Each cell shows the symbol of the last living agent mapped onto it, or
/// `.` if none.  Dead agents are not drawn.
pub fn render_map(agents: &[AgentSnapshot], bounds: GridBounds) -> String {
    let mut cells = [['.'; MAP_COLS]; MAP_ROWS];
    if !bounds.is_empty() {
        for agent in agents.iter().filter(|a| a.alive) {
            let col = i64::from(agent.pos.x) * MAP_COLS as i64 / i64::from(bounds.width);
            let row = i64::from(agent.pos.y) * MAP_ROWS as i64 / i64::from(bounds.height);
            if (0..MAP_COLS as i64).contains(&col) && (0..MAP_ROWS as i64).contains(&row) {
                cells[row as usize][col as usize] = agent.kind.symbol();
            }
        }
    }

    let border: String = std::iter::repeat_n('-', MAP_COLS).collect();
    let mut out = String::with_capacity((MAP_COLS + 6) * (MAP_ROWS + 3));
    let _ = writeln!(out, "Simplified Map ({MAP_COLS}x{MAP_ROWS}):");
    let _ = writeln!(out, "  +{border}+");
    for row in &cells {
        out.push_str("  |");
        out.extend(row.iter());
        out.push_str("|\n");
    }
    let _ = writeln!(out, "  +{border}+");
    out
}
