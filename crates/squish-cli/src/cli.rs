// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Squish: headless soft-body scenes.
#[derive(Parser, Debug)]
#[command(name = "squish", author, version, about, long_about = None)]
pub struct Cli {
    /// More log output on stderr (repeatable). Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate a scene and print a summary.
    Run(RunArgs),
    /// Print the default scene config as JSON.
    Config,
}

/// Options for `squish run`. Flags override the config file.
#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// JSON scene config; the stock head-on demo when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Steps to simulate.
    #[arg(short, long)]
    pub ticks: Option<u64>,

    /// Fixed timestep in seconds.
    #[arg(long)]
    pub dt: Option<f32>,

    /// Seed for random bodies.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Add this many random spheres.
    #[arg(short, long)]
    pub bodies: Option<usize>,

    /// Summary format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

/// Output format for the run summary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable tables.
    #[default]
    Table,
    /// One JSON document.
    Json,
}
