//! Prob command: success probability of a fixed sample count.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rann_sizing::{SizingError, success_probability};

use crate::cli::ProbArgs;
use crate::config::RannConfig;
use crate::convert;

/// Run the prob command.
pub fn run(args: ProbArgs, config: &RannConfig) -> Result<()> {
    let _cmd = info_span!("prob").entered();
    let p = evaluate(&args, config)?;
    println!("{p}");
    Ok(())
}

/// Success probability of `args.m` draws under the resolved parameters.
pub fn evaluate(args: &ProbArgs, config: &RannConfig) -> Result<f64> {
    let params = convert::build_search_params(args.n, &config.search, args.k, args.tau, None);

    // A window smaller than k is a valid question here: the answer is just low.
    match params.validate() {
        Ok(()) | Err(SizingError::RankWindowTooSmall { .. }) => {}
        Err(e) => return Err(e).context("invalid search parameters"),
    }

    let t = params.rank_window();
    let eps = params.hit_probability();
    let p = success_probability(params.n(), params.k(), args.m, t);
    info!(n = params.n(), k = params.k(), m = args.m, t, eps, p, "success probability");
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use approx::assert_abs_diff_eq;
    use clap::Parser;

    fn prob_args(argv: &[&str]) -> ProbArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        let Command::Prob(args) = cli.command else {
            panic!("expected prob subcommand");
        };
        args
    }

    #[test]
    fn test_single_neighbor_closed_form() {
        let args = prob_args(&["rann", "prob", "-n", "1000", "--tau", "1", "-m", "299"]);
        let p = evaluate(&args, &RannConfig::default()).unwrap();
        assert_abs_diff_eq!(p, 1.0 - 0.99_f64.powf(299.0), epsilon = 1e-12);
    }

    #[test]
    fn test_small_window_is_answered() {
        // t = 1 < k = 5 is still evaluated; five hits out of 50 at eps = 0.01
        // is rare.
        let args = prob_args(&["rann", "prob", "-n", "100", "-k", "5", "--tau", "1", "-m", "50"]);
        let p = evaluate(&args, &RannConfig::default()).unwrap();
        assert!(p.abs() < 1e-3, "got {p}");
    }

    #[test]
    fn test_invalid_tau_rejected() {
        let args = prob_args(&["rann", "prob", "-n", "100", "--tau", "150", "-m", "10"]);
        let err = evaluate(&args, &RannConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid search parameters"));
    }
}
