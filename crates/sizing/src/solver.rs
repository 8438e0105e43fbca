//! Minimum sample size search.

use tracing::{debug, trace};

use crate::error::SizingError;
use crate::params::{SearchParams, rank_window};
use crate::probability::success_probability;
use crate::result::SampleSize;

/// A probability this close above `alpha` ends the search.
const ALPHA_TOLERANCE: f64 = 0.001;

/// Minimum number of uniform samples so that, with probability `alpha`, at
/// least `k` of them fall in the top `tau` percent of `n` points.
///
/// Binary-searches `m` in `[k, n]` with
/// `t = ceil(tau * n / 100)` and returns `min(m + 1, n)`, the solved value
/// plus one sample of margin. Inputs are not validated; see [`sample_size`]
/// for the checked entry point.
///
/// # Panics
///
/// Panics if `alpha > 1` (or is NaN). Debug builds also panic when the rank
/// window exceeds `n`, i.e. `tau > 100`.
///
/// # Example
///
/// ```
/// use rann_sizing::minimum_samples_reqd;
///
/// let m = minimum_samples_reqd(1000, 1, 1.0, 0.95);
/// assert!((298..=301).contains(&m));
/// ```
pub fn minimum_samples_reqd(n: usize, k: usize, tau: f64, alpha: f64) -> usize {
    assert!(alpha <= 1.0, "alpha must be <= 1, got {alpha}");
    let t = rank_window(n, tau);
    let (m, _) = search(n, k, t, alpha);
    m.saturating_add(1).min(n)
}

/// Validates `params` and solves for the number of samples to draw.
///
/// Runs the same search as [`minimum_samples_reqd`] and reports the solved
/// value, the rank window and the success probability alongside the count.
///
/// # Errors
///
/// Returns [`SizingError`] if `params` fails [`SearchParams::validate`].
#[tracing::instrument(skip(params), fields(n = params.n(), k = params.k(), tau = params.tau(), alpha = params.alpha()))]
pub fn sample_size(params: &SearchParams) -> Result<SampleSize, SizingError> {
    params.validate()?;

    let t = params.rank_window();
    let (solved, probability) = search(params.n(), params.k(), t, params.alpha());
    let samples = solved.saturating_add(1).min(params.n());

    debug!(t, solved, samples, probability, "sample size solved");
    Ok(SampleSize::new(samples, solved, t, probability))
}

/// Searches for the smallest `m` whose success probability reaches `alpha`.
///
/// Returns the settled `m` and its probability. The search assumes the
/// probability is non-decreasing in `m`.
///
/// Branches per step:
///
/// | Condition | Action |
/// |-----------|--------|
/// | `prob > alpha`, within tolerance or bracket closed | stop |
/// | `prob > alpha` | `ub = m` |
/// | `prob < alpha`, `m == lb` | `m += 1`, re-evaluate without bisecting |
/// | `prob < alpha` | `lb = m` |
/// | `prob == alpha` | stop |
///
/// The `m == lb` branch has no iteration cap. It advances one sample at a
/// time while the probability stays below `alpha` at the lower bound.
fn search(n: usize, k: usize, t: usize, alpha: f64) -> (usize, f64) {
    let mut ub = n;
    let mut lb = k;
    let mut m = lb;
    let mut steps = 0usize;

    loop {
        steps += 1;
        let prob = success_probability(n, k, m, t);
        trace!(m, lb, ub, prob, "search step");

        if prob > alpha {
            if prob - alpha < ALPHA_TOLERANCE || ub < lb + 2 {
                debug!(m, steps, "search converged");
                return (m, prob);
            }
            ub = m;
        } else if prob < alpha {
            if m == lb {
                m += 1;
                continue;
            }
            lb = m;
        } else {
            debug!(m, steps, "search hit alpha exactly");
            return (m, prob);
        }

        m = (ub + lb) / 2;
    }
}
