use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Walker finite-state Markov chain simulator.
#[derive(Parser)]
#[command(
    name = "walker",
    version,
    about = "Finite-state Markov chain simulator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the sampling loop and print the statistics report.
    Simulate(SimulateArgs),
    /// Print the row-normalized transition matrix without simulating.
    Normalize(NormalizeArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "walker.toml")]
    pub config: PathBuf,

    /// Override number of steps from config.
    #[arg(long)]
    pub steps: Option<u64>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the report as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `normalize` subcommand.
#[derive(clap::Args)]
pub struct NormalizeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "walker.toml")]
    pub config: PathBuf,
}
