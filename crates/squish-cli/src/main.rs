// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! `squish`: run Squish scenes headless and summarize what collided.

mod cli;
mod report;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use squish_core::{RandomBodies, SceneConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, Format, RunArgs};
use crate::report::RunSummary;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A second init (tests calling main twice) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Applies command-line overrides on top of the file (or default) config.
fn resolve_config(args: &RunArgs) -> Result<SceneConfig> {
    let mut config = match &args.config {
        Some(path) => {
            SceneConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => SceneConfig::default(),
    };
    if let Some(ticks) = args.ticks {
        config.ticks = ticks;
    }
    if let Some(dt) = args.dt {
        config.dt = dt;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(count) = args.bodies {
        let random = config.random.get_or_insert_with(RandomBodies::default);
        random.count = count;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run(args: &RunArgs) -> Result<RunSummary> {
    let config = resolve_config(args)?;
    let mut scene = config.build_scene().context("failed to build scene")?;
    info!(ticks = config.ticks, dt = config.dt, bodies = scene.bodies().len(), "running");

    let mut summary = RunSummary::new(config.dt);
    for _ in 0..config.ticks {
        let step = scene.step(config.dt);
        summary.record(&step);
    }
    summary.finish(&scene);
    Ok(summary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Run(args) => {
            let summary = run(&args)?;
            match args.format {
                Format::Table => writeln!(out, "{}", summary.render_tables())?,
                Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?,
            }
        }
        Command::Config => {
            writeln!(out, "{}", SceneConfig::default().to_json_pretty()?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = RunArgs {
            ticks: Some(5),
            dt: Some(0.01),
            seed: Some(9),
            bodies: Some(2),
            ..RunArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.ticks, 5);
        assert_eq!(config.seed, 9);
        assert_eq!(config.random.map(|r| r.count), Some(2));
    }

    #[test]
    fn zero_dt_is_rejected() {
        let args = RunArgs {
            dt: Some(0.0),
            ..RunArgs::default()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn default_run_reports_one_impact() {
        let summary = run(&RunArgs::default()).unwrap();
        assert_eq!(summary.body_collisions, 1);
        assert_eq!(summary.bodies.len(), 2);
    }
}
