//! Hive Board
//!
//! Drive a roster board from stdin, one command per line.
//!
//! ```text
//! hive-board [config.toml] [--sample] < commands.txt
//! ```

use std::env;
use std::io::{self, BufRead, Write};

use hive_roster::{execute, sample_roster, BoardConfig, Command, RosterStore, USAGE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hive_board=info,hive_roster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let seed_sample = args.iter().any(|a| a == "--sample");

    let config = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    let members = if seed_sample { sample_roster() } else { Vec::new() };
    let mut store = RosterStore::with_members(config, members)?;

    tracing::info!(members = store.len(), "hive board ready");

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let report = match line.parse::<Command>() {
            Ok(command) => match execute(&mut store, command) {
                Ok(outcome) => outcome.render()?,
                Err(e) => format!("error: {e}"),
            },
            Err(e) => format!("error: {e}\n{USAGE}"),
        };
        writeln!(out, "{report}")?;
    }

    tracing::info!(members = store.len(), "hive board closed");
    Ok(())
}
