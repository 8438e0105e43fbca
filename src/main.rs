mod cli;
mod config;
mod convert;
mod logging;
mod plan;
mod prob_cmd;
mod report;
mod sample_cmd;
mod size_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Size(args) => size_cmd::run(args, &config),
        Command::Prob(args) => prob_cmd::run(args, &config),
        Command::Sample(args) => sample_cmd::run(args, &config),
        Command::Plan(args) => plan::run(args, &config),
    }
}
