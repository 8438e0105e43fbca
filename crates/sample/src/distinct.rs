//! Uniform sampling with replacement, reduced to distinct indices.

use rand::Rng;
use tracing::debug;

use crate::error::SampleError;

/// Pre-allocated tally buffer for distinct sampling.
///
/// Reuse across calls to [`obtain_distinct_samples_with_scratch`] to avoid a
/// fresh allocation per query when many queries share one population.
///
/// # Example
///
/// ```
/// use rann_sample::SampleScratch;
///
/// let mut scratch = SampleScratch::new(1000);
/// // Use with obtain_distinct_samples_with_scratch() in a query loop...
/// ```
#[derive(Debug, Clone, Default)]
pub struct SampleScratch {
    /// Per-index hit counts of the most recent call.
    pub(crate) tally: Vec<usize>,
}

impl SampleScratch {
    /// Creates a scratch buffer with capacity for a range of `max_range` indices.
    pub fn new(max_range: usize) -> Self {
        Self {
            tally: Vec::with_capacity(max_range),
        }
    }
}

/// Draws `num_samples` uniform indices from `[0, range_upper_bound)` with
/// replacement and returns the distinct indices hit, in ascending order.
///
/// The result holds at most `min(num_samples, range_upper_bound)` indices;
/// repeated draws collapse. `num_samples = 0` returns an empty vector.
///
/// # Errors
///
/// Returns [`SampleError::EmptyRange`] if `range_upper_bound` is zero.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rann_sample::obtain_distinct_samples;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let indices = obtain_distinct_samples(20, 100, &mut rng).unwrap();
/// assert!(indices.len() <= 20);
/// assert!(indices.windows(2).all(|w| w[0] < w[1]));
/// ```
pub fn obtain_distinct_samples(
    num_samples: usize,
    range_upper_bound: usize,
    rng: &mut impl Rng,
) -> Result<Vec<usize>, SampleError> {
    let mut scratch = SampleScratch::new(range_upper_bound);
    obtain_distinct_samples_with_scratch(num_samples, range_upper_bound, rng, &mut scratch)
}

/// Same as [`obtain_distinct_samples`], reusing `scratch` for the tally.
///
/// The buffer grows as needed and never shrinks. For the same RNG state the
/// result is identical to the allocating variant.
///
/// # Errors
///
/// Returns [`SampleError::EmptyRange`] if `range_upper_bound` is zero.
pub fn obtain_distinct_samples_with_scratch(
    num_samples: usize,
    range_upper_bound: usize,
    rng: &mut impl Rng,
    scratch: &mut SampleScratch,
) -> Result<Vec<usize>, SampleError> {
    if range_upper_bound == 0 {
        return Err(SampleError::EmptyRange);
    }

    let tally = &mut scratch.tally;
    tally.clear();
    tally.resize(range_upper_bound, 0);

    for _ in 0..num_samples {
        tally[rng.random_range(0..range_upper_bound)] += 1;
    }

    let distinct: Vec<usize> = tally
        .iter()
        .enumerate()
        .filter(|&(_, &hits)| hits > 0)
        .map(|(idx, _)| idx)
        .collect();

    debug!(
        drawn = num_samples,
        distinct = distinct.len(),
        range = range_upper_bound,
        "distinct samples drawn"
    );
    Ok(distinct)
}
