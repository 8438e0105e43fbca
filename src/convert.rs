//! Pure conversion functions: TOML config + CLI overrides -> crate API types.

use rand::SeedableRng;
use rand::rngs::StdRng;

use rann_sizing::SearchParams;

use crate::config::SearchToml;

/// Builds [`SearchParams`] for a population of `n`, preferring CLI values
/// over the `[search]` table.
pub fn build_search_params(
    n: usize,
    search: &SearchToml,
    k: Option<usize>,
    tau: Option<f64>,
    alpha: Option<f64>,
) -> SearchParams {
    SearchParams::new(n, k.unwrap_or(search.k))
        .with_tau(tau.unwrap_or(search.tau))
        .with_alpha(alpha.unwrap_or(search.alpha))
}

/// Seeded RNG when a seed is given, OS entropy otherwise.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
