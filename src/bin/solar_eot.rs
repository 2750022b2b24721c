//! Shows the date, time, Equation of Time and solar declination,
//! refreshed once per tick.
//!
//! # Usage
//!
//! ```bash
//! # Host clock, UTC, one frame per second until interrupted
//! cargo run --bin solar-eot
//!
//! # Clock kept at UTC-5, ten frames
//! cargo run --bin solar-eot -- --tz -5 --ticks 10
//!
//! # Single frame for a fixed instant
//! cargo run --bin solar-eot -- --at 2024-01-16T00:46:30 --ticks 1
//! ```
//!
//! Settings are layered: built-in defaults, then `--config <file.toml>`,
//! then the individual flags. `RUST_LOG` sets the log level (default: info).

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use solar_eot::{
    CalendarTimestamp, ClockSource, Config, FixedClock, Orchestrator, SystemClock,
    TerminalDisplay,
};

#[derive(Parser)]
#[command(name = "solar-eot", about = "Solar declination and Equation of Time display")]
struct Cli {
    /// TOML file with tz_offset, tick_interval_ms and max_ticks
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hours subtracted from the clock to get UT (UTC+2 is 2, UTC-5 is -5)
    #[arg(long, allow_hyphen_values = true)]
    tz: Option<f64>,

    /// Refresh interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Number of frames to show before exiting
    #[arg(long)]
    ticks: Option<u64>,

    /// Freeze the clock at this local time (YYYY-MM-DDTHH:MM:SS)
    #[arg(long, value_parser = parse_instant)]
    at: Option<NaiveDateTime>,
}

fn parse_instant(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map_err(|e| e.to_string())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(tz) = cli.tz {
        config.tz_offset = tz;
    }
    if let Some(ms) = cli.interval_ms {
        config.tick_interval_ms = ms;
    }
    if cli.ticks.is_some() {
        config.max_ticks = cli.ticks;
    }
    config.validate()?;
    Ok(config)
}

fn run<C: ClockSource>(clock: C, config: &Config) -> anyhow::Result<()> {
    let display = TerminalDisplay::new(io::stdout().lock());
    let mut orchestrator = Orchestrator::new(clock, display, config)?;
    let ticks = orchestrator.run()?;
    info!(ticks, "done");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli).context("invalid configuration")?;

    match cli.at {
        Some(at) => {
            let ts = CalendarTimestamp::from(at);
            info!(timestamp = %ts, "using fixed clock");
            run(FixedClock(ts), &config)
        }
        None => run(SystemClock::new(config.timezone()?)?, &config),
    }
}
