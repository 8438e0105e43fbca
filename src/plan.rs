//! Plan command: size the sample for a query, then draw it.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rann_sample::obtain_distinct_samples;
use rann_sizing::sample_size;

use crate::cli::PlanArgs;
use crate::config::RannConfig;
use crate::convert;
use crate::report::{self, PlanReport, SizeReport};

/// Run the plan command.
pub fn run(args: PlanArgs, config: &RannConfig) -> Result<()> {
    let _cmd = info_span!("plan").entered();
    let plan = build_plan(&args, config)?;

    if let Some(ref path) = args.output {
        report::write_json(&plan, path)?;
        info!(path = %path.display(), "report written");
    } else if args.json {
        println!("{}", report::to_json(&plan)?);
    } else {
        print_summary(&plan);
    }
    Ok(())
}

/// Solve the sample count and draw that many indices.
pub fn build_plan(args: &PlanArgs, config: &RannConfig) -> Result<PlanReport> {
    // Step 1: Resolve parameters and seed
    let search = &args.search;
    let params =
        convert::build_search_params(search.n, &config.search, search.k, search.tau, search.alpha);
    let seed = args.seed.or(config.seed);
    info!(
        n = params.n(),
        k = params.k(),
        tau = params.tau(),
        alpha = params.alpha(),
        seed = ?seed,
        "planning query sample"
    );

    // Step 2: Solve for the sample count
    let size = sample_size(&params).context("invalid search parameters")?;
    info!(
        samples = size.samples(),
        rank_window = size.rank_window(),
        "sample size solved"
    );

    // Step 3: Draw the indices to inspect
    let mut rng = convert::build_rng(seed);
    let indices = obtain_distinct_samples(size.samples(), params.n(), &mut rng)
        .context("failed to draw samples")?;
    info!(distinct = indices.len(), "samples drawn");

    Ok(PlanReport {
        size: SizeReport::new(&params, &size),
        seed,
        distinct: indices.len(),
        indices,
    })
}

fn print_summary(plan: &PlanReport) {
    let s = &plan.size;
    println!(
        "rank window: {} of {} points (tau = {}%)",
        s.rank_window, s.n, s.tau
    );
    println!(
        "samples:     {} (P = {:.4} at {}, alpha = {})",
        s.samples, s.probability, s.solved, s.alpha
    );
    println!("distinct:    {}", plan.distinct);
    let indices: Vec<String> = plan.indices.iter().map(usize::to_string).collect();
    println!("indices:     {}", indices.join(" "));
}
