//! Sample command: draw distinct uniform indices.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rann_sample::obtain_distinct_samples;

use crate::cli::SampleArgs;
use crate::config::RannConfig;
use crate::convert;

/// Run the sample command.
pub fn run(args: SampleArgs, config: &RannConfig) -> Result<()> {
    let _cmd = info_span!("sample").entered();
    let indices = draw(&args, config)?;

    let mut out = io::stdout().lock();
    for idx in &indices {
        writeln!(out, "{idx}")?;
    }
    Ok(())
}

/// Draw the requested indices, seeding from the CLI or the config.
pub fn draw(args: &SampleArgs, config: &RannConfig) -> Result<Vec<usize>> {
    let seed = args.seed.or(config.seed);
    let mut rng = convert::build_rng(seed);

    let indices = obtain_distinct_samples(args.count, args.range, &mut rng)
        .context("failed to draw samples")?;
    info!(
        drawn = args.count,
        distinct = indices.len(),
        seed = ?seed,
        "samples drawn"
    );
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_args(count: usize, range: usize, seed: Option<u64>) -> SampleArgs {
        SampleArgs { count, range, seed }
    }

    #[test]
    fn test_cli_seed_overrides_config() {
        let config = RannConfig {
            seed: Some(1),
            ..RannConfig::default()
        };
        let from_cli = draw(&sample_args(20, 1000, Some(2)), &config).unwrap();
        let explicit = draw(&sample_args(20, 1000, Some(2)), &RannConfig::default()).unwrap();
        let from_config = draw(&sample_args(20, 1000, None), &config).unwrap();
        assert_eq!(from_cli, explicit);
        assert_ne!(from_cli, from_config);
    }

    #[test]
    fn test_empty_range_errors() {
        let err = draw(&sample_args(5, 0, Some(1)), &RannConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to draw samples"));
    }
}
