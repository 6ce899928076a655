//! `fate` — run one battle simulation from the command line.
//!
//! ```text
//! fate                               # 50 agents, 100x100, 30 s, kill log in log.txt
//! fate --duration 10 --seed 7 --map  # reproducible short run, mini-map at the end
//! fate --snapshot final.txt --quiet  # save the final roster, no status line
//! ```
//!
//! Ctrl-C stops the run early; the final report is printed either way.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fate_core::{AgentKind, SimConfig};
use fate_output::{ConsoleObserver, DEFAULT_LOG_PATH, FileObserver, save_snapshot};
use fate_sim::SimBuilder;

#[derive(Parser)]
#[command(name = "fate")]
#[command(version)]
#[command(about = "Concurrent Bear / Werewolf / Bandit battle simulation")]
struct Cli {
    /// Run length in seconds
    #[arg(long, default_value = "30")]
    duration: u64,

    /// Number of randomly placed agents
    #[arg(long, default_value = "50")]
    agents: usize,

    /// Master RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Map width in cells
    #[arg(long, default_value = "100")]
    width: i32,

    /// Map height in cells
    #[arg(long, default_value = "100")]
    height: i32,

    /// Kill log file (appended)
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    log: PathBuf,

    /// Write the final roster to this file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Print the mini-map after the report
    #[arg(long)]
    map: bool,

    /// Collapse duplicate battle tasks after every movement tick
    #[arg(long)]
    dedup: bool,

    /// Do not draw the status line
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging (per-battle rolls)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> SimConfig {
        SimConfig {
            map_width:       self.width,
            map_height:      self.height,
            agent_count:     self.agents,
            duration_secs:   self.duration,
            seed:            self.seed,
            status_line:     !self.quiet,
            dedup_each_tick: self.dedup,
            ..SimConfig::default()
        }
    }
}

fn banner(config: &SimConfig) {
    println!("=== Fate: Bear, Werewolf, Bandit ===");
    println!("Map size: {}x{}", config.map_width, config.map_height);
    println!("Agents:   {}", config.agent_count);
    println!("Rules:");
    for kind in AgentKind::ALL {
        println!("  - {kind} kills {}", kind.prey());
    }
    let reach = |f: fn(AgentKind) -> i32| {
        AgentKind::ALL
            .iter()
            .map(|&k| format!("{k}({})", f(k)))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("  - Movement distances: {}", reach(AgentKind::move_distance));
    println!("  - Kill distances: {}", reach(AgentKind::kill_distance));
    println!("{}", "=".repeat(50));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = cli.config();
    banner(&config);

    let kill_log = Arc::new(
        FileObserver::open(&cli.log)
            .with_context(|| format!("opening kill log {}", cli.log.display()))?,
    );
    let mut sim = SimBuilder::new(config)
        .observer(Arc::new(ConsoleObserver::new()))
        .observer(kill_log.clone())
        .build()
        .context("initializing simulation")?;

    let interrupt = Arc::new(AtomicBool::new(false));
    {
        let interrupt = Arc::clone(&interrupt);
        ctrlc::set_handler(move || {
            eprintln!("\n\nReceived interrupt signal. Stopping game...");
            interrupt.store(true, Ordering::Release);
        })
        .context("installing Ctrl-C handler")?;
    }

    info!(duration_secs = cli.duration, "game started");
    let outcome = sim.run(&interrupt);

    // The report is printed even when a worker failed.
    let report = sim.report().context("building final report")?;
    println!("\n\n{report}");
    if cli.map {
        println!("\n{}", sim.map()?);
    }

    if let Some(path) = &cli.snapshot {
        let agents = sim.snapshot()?;
        save_snapshot(path, &agents)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
        println!("Snapshot saved to '{}'", path.display());
    }

    kill_log.flush()?;
    if let Some(e) = kill_log.take_error() {
        tracing::warn!(error = %e, "kill log incomplete");
    }
    println!("\nDetailed log saved to '{}'", kill_log.path().display());

    outcome.context("simulation failed")?;
    if report.duration < Duration::from_secs(cli.duration) {
        println!("\nSimulation interrupted after {}s.", report.duration.as_secs());
    } else {
        println!("\nSimulation completed successfully!");
    }
    Ok(())
}
