//! `lifecycle` — replay lifecycle commands and print audit records.
//!
//! Reads a JSON array of steps and prints, for each step, the
//! `LifecycleRecord` a repository would persist.
//!
//! ```text
//! lifecycle scenario.json --pretty
//! lifecycle scenario.json --fixed-time 2024-06-01T00:00:00Z
//! ```
//!
//! A scenario looks like:
//!
//! ```json
//! [
//!   {"op": "create", "user": "alice"},
//!   {"op": "update", "user": "bob"},
//!   {"op": "delete"}
//! ]
//! ```

mod scenario;
mod settings;

use std::{fs, path::PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use clap::Parser;
use ddd_core::clock::{Clock, FixedClock, SystemClock};
use scenario::{Replay, Step};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Replay lifecycle commands")]
struct Cli {
  /// Path to the JSON scenario file.
  scenario: PathBuf,

  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "lifecycle.toml")]
  config: PathBuf,

  /// Actor for steps without a `user`; overrides `default_actor`.
  #[arg(long)]
  actor: Option<String>,

  /// Pretty-print each record.
  #[arg(long)]
  pretty: bool,

  /// Use this instant for every transition instead of the system clock.
  #[arg(long, value_name = "RFC3339")]
  fixed_time: Option<DateTime<Utc>>,
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;

  let raw = fs::read_to_string(&cli.scenario)
    .with_context(|| format!("reading scenario {}", cli.scenario.display()))?;
  let steps: Vec<Step> =
    serde_json::from_str(&raw).context("parsing scenario")?;

  let clock: Box<dyn Clock> = match cli.fixed_time {
    Some(t) => Box::new(FixedClock(t)),
    None => Box::new(SystemClock),
  };
  let actor = cli.actor.or(settings.default_actor);
  let pretty = cli.pretty || settings.pretty;

  tracing::info!(steps = steps.len(), "replaying scenario");
  let records = Replay::new(&clock, actor.as_deref()).run(&steps)?;

  for record in &records {
    let line = if pretty {
      serde_json::to_string_pretty(record)?
    } else {
      serde_json::to_string(record)?
    };
    println!("{line}");
  }

  Ok(())
}
