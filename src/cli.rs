use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sample sizing for rank-approximate nearest-neighbor search.
#[derive(Debug, Parser)]
#[command(
    name = "rann",
    version,
    about = "Sample sizing for rank-approximate nearest-neighbor search"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the number of samples a query must draw.
    Size(SizeArgs),
    /// Evaluate the success probability of a given sample count.
    Prob(ProbArgs),
    /// Draw distinct uniform indices.
    Sample(SampleArgs),
    /// Compute the sample count, then draw that many indices.
    Plan(PlanArgs),
}

/// Search parameters shared by `size` and `plan`.
#[derive(Debug, clap::Args)]
pub struct SearchArgs {
    /// Population size (number of candidate points).
    #[arg(short = 'n', long = "population")]
    pub n: usize,

    /// Number of neighbors required. Overrides `[search].k`.
    #[arg(short = 'k', long = "neighbors")]
    pub k: Option<usize>,

    /// Rank-approximation percentage in (0, 100]. Overrides `[search].tau`.
    #[arg(long)]
    pub tau: Option<f64>,

    /// Target success probability in (0, 1]. Overrides `[search].alpha`.
    #[arg(long)]
    pub alpha: Option<f64>,
}

/// Arguments for the `size` subcommand.
#[derive(Debug, clap::Args)]
pub struct SizeArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Print a JSON report instead of the bare count.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `prob` subcommand.
#[derive(Debug, clap::Args)]
pub struct ProbArgs {
    /// Population size (number of candidate points).
    #[arg(short = 'n', long = "population")]
    pub n: usize,

    /// Number of neighbors required. Overrides `[search].k`.
    #[arg(short = 'k', long = "neighbors")]
    pub k: Option<usize>,

    /// Rank-approximation percentage in (0, 100]. Overrides `[search].tau`.
    #[arg(long)]
    pub tau: Option<f64>,

    /// Number of samples drawn.
    #[arg(short = 'm', long = "samples")]
    pub m: usize,
}

/// Arguments for the `sample` subcommand.
#[derive(Debug, clap::Args)]
pub struct SampleArgs {
    /// Number of uniform draws.
    #[arg(short = 'm', long)]
    pub count: usize,

    /// Exclusive upper bound of the index range.
    #[arg(short, long)]
    pub range: usize,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `plan` subcommand.
#[derive(Debug, clap::Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Write the JSON report to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
