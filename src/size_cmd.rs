//! Size command: solve for the number of samples a query must draw.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rann_sizing::sample_size;

use crate::cli::{SearchArgs, SizeArgs};
use crate::config::RannConfig;
use crate::convert;
use crate::report::{self, SizeReport};

/// Run the size command.
pub fn run(args: SizeArgs, config: &RannConfig) -> Result<()> {
    let _cmd = info_span!("size").entered();
    let report = solve(&args.search, config)?;

    if args.json {
        println!("{}", report::to_json(&report)?);
    } else {
        println!("{}", report.samples);
    }
    Ok(())
}

/// Resolve search parameters and solve for the sample count.
pub fn solve(search: &SearchArgs, config: &RannConfig) -> Result<SizeReport> {
    let params =
        convert::build_search_params(search.n, &config.search, search.k, search.tau, search.alpha);
    info!(
        n = params.n(),
        k = params.k(),
        tau = params.tau(),
        alpha = params.alpha(),
        "solving sample size"
    );

    let size = sample_size(&params).context("invalid search parameters")?;
    info!(samples = size.samples(), "sample size solved");
    Ok(SizeReport::new(&params, &size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use crate::config::SearchToml;
    use clap::Parser;

    fn search_args(argv: &[&str]) -> SearchArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        let Command::Size(args) = cli.command else {
            panic!("expected size subcommand");
        };
        args.search
    }

    #[test]
    fn test_solve_known_case() {
        let search = search_args(&["rann", "size", "-n", "1000", "--tau", "1", "--alpha", "0.95"]);
        let report = solve(&search, &RannConfig::default()).unwrap();
        assert!((298..=301).contains(&report.samples), "got {}", report.samples);
        assert_eq!(report.rank_window, 10);
    }

    #[test]
    fn test_solve_uses_config_defaults() {
        let search = search_args(&["rann", "size", "-n", "2000"]);
        let config = RannConfig {
            search: SearchToml {
                k: 3,
                tau: 2.0,
                alpha: 0.9,
            },
            ..RannConfig::default()
        };
        let report = solve(&search, &config).unwrap();
        assert_eq!(report.k, 3);
        assert_eq!(report.rank_window, 40);
        assert!(report.probability >= 0.9);
    }

    #[test]
    fn test_solve_rejects_k_above_population() {
        let search = search_args(&["rann", "size", "-n", "10", "-k", "11"]);
        let err = solve(&search, &RannConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid search parameters"));
    }
}
