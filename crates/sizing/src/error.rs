//! Error types for the rann-sizing crate.

/// Error type for all fallible operations in the rann-sizing crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SizingError {
    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when more neighbors are requested than the population holds.
    #[error("k ({k}) exceeds the population size ({n})")]
    KExceedsPopulation {
        /// Requested neighbor count.
        k: usize,
        /// Population size.
        n: usize,
    },

    /// Returned when tau is non-finite or outside (0, 100].
    #[error("tau must be in (0, 100], got {tau}")]
    InvalidTau {
        /// The invalid tau value.
        tau: f64,
    },

    /// Returned when alpha is non-finite or outside (0, 1].
    #[error("alpha must be in (0, 1], got {alpha}")]
    InvalidAlpha {
        /// The invalid alpha value.
        alpha: f64,
    },

    /// Returned when the rank window holds fewer than k points.
    #[error(
        "rank window of {tau}% covers {t} points, fewer than k = {k}; increase tau"
    )]
    RankWindowTooSmall {
        /// Size of the rank window.
        t: usize,
        /// Requested neighbor count.
        k: usize,
        /// Rank-approximation percentage that produced the window.
        tau: f64,
    },
}
