//! Output type for sample size queries.

/// Result of a sample size query.
///
/// Carries the sample count a query should draw together with the search
/// state it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSize {
    /// Samples to draw: `min(solved + 1, n)`.
    samples: usize,
    /// Value the search settled on, before the one-sample margin.
    solved: usize,
    /// Size of the rank window, `ceil(tau * n / 100)`.
    rank_window: usize,
    /// Success probability at `solved`.
    probability: f64,
}

impl SampleSize {
    /// Creates a new `SampleSize`.
    pub(crate) fn new(samples: usize, solved: usize, rank_window: usize, probability: f64) -> Self {
        Self {
            samples,
            solved,
            rank_window,
            probability,
        }
    }

    /// Returns the number of samples to draw.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Returns the solved value before the safety margin was added.
    pub fn solved(&self) -> usize {
        self.solved
    }

    /// Returns the size of the rank window.
    pub fn rank_window(&self) -> usize {
        self.rank_window
    }

    /// Returns the modelled success probability at [`solved`](Self::solved).
    pub fn probability(&self) -> f64 {
        self.probability
    }
}
