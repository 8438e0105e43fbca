//! Parameters of a rank-approximate neighbor query.

use crate::error::SizingError;

/// Default rank-approximation percentage.
pub const DEFAULT_TAU: f64 = 5.0;

/// Default target success probability.
pub const DEFAULT_ALPHA: f64 = 0.95;

/// Parameters that determine how many candidates a query must sample.
///
/// Use the builder methods to customise `tau` and `alpha`.
///
/// # Example
///
/// ```
/// use rann_sizing::SearchParams;
///
/// let params = SearchParams::new(1000, 1)
///     .with_tau(1.0)
///     .with_alpha(0.95);
///
/// assert!(params.validate().is_ok());
/// assert_eq!(params.rank_window(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Population size (number of candidate points).
    n: usize,
    /// Number of neighbors required.
    k: usize,
    /// Rank-approximation percentage.
    tau: f64,
    /// Target success probability.
    alpha: f64,
}

impl SearchParams {
    /// Creates parameters for a population of `n` points and `k` neighbors.
    ///
    /// Defaults: `tau = 5.0`, `alpha = 0.95`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            tau: DEFAULT_TAU,
            alpha: DEFAULT_ALPHA,
        }
    }

    /// Sets the rank-approximation percentage.
    pub fn with_tau(mut self, tau: f64) -> Self {
        self.tau = tau;
        self
    }

    /// Sets the target success probability.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Returns the population size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number of neighbors required.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the rank-approximation percentage.
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Returns the target success probability.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Size of the rank tolerance window, `ceil(tau * n / 100)`.
    pub fn rank_window(&self) -> usize {
        rank_window(self.n, self.tau)
    }

    /// Per-draw probability of hitting the rank window, `t / n`.
    ///
    /// Returns 0.0 for an empty population.
    pub fn hit_probability(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.rank_window() as f64 / self.n as f64
    }

    /// Validates these parameters.
    ///
    /// Checks, in order: `k >= 1`, `k <= n`, `tau` in (0, 100], `alpha` in
    /// (0, 1], and that the rank window holds at least `k` points.
    pub fn validate(&self) -> Result<(), SizingError> {
        if self.k < 1 {
            return Err(SizingError::InvalidK { k: self.k });
        }
        if self.k > self.n {
            return Err(SizingError::KExceedsPopulation {
                k: self.k,
                n: self.n,
            });
        }
        if !self.tau.is_finite() || self.tau <= 0.0 || self.tau > 100.0 {
            return Err(SizingError::InvalidTau { tau: self.tau });
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(SizingError::InvalidAlpha { alpha: self.alpha });
        }
        let t = self.rank_window();
        if t < self.k {
            return Err(SizingError::RankWindowTooSmall {
                t,
                k: self.k,
                tau: self.tau,
            });
        }
        Ok(())
    }
}

/// Size of the rank tolerance window for a population of `n` points.
pub(crate) fn rank_window(n: usize, tau: f64) -> usize {
    (tau * n as f64 / 100.0).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_defaults() {
        let p = SearchParams::new(100, 3);
        assert_eq!(p.n(), 100);
        assert_eq!(p.k(), 3);
        assert_abs_diff_eq!(p.tau(), 5.0);
        assert_abs_diff_eq!(p.alpha(), 0.95);
    }

    #[test]
    fn test_builder_chaining() {
        let p = SearchParams::new(900, 2).with_tau(1.5).with_alpha(0.99);
        assert_abs_diff_eq!(p.tau(), 1.5);
        assert_abs_diff_eq!(p.alpha(), 0.99);
    }

    #[test]
    fn test_rank_window_known_values() {
        assert_eq!(SearchParams::new(1000, 1).with_tau(1.0).rank_window(), 10);
        assert_eq!(SearchParams::new(900, 1).with_tau(1.0).rank_window(), 9);
        assert_eq!(SearchParams::new(1000, 1).rank_window(), 50);
        // 33% of 10 = 3.3 -> 4
        assert_eq!(SearchParams::new(10, 1).with_tau(33.0).rank_window(), 4);
        // Tiny tau still rounds up to one point.
        assert_eq!(SearchParams::new(100, 1).with_tau(0.05).rank_window(), 1);
        assert_eq!(SearchParams::new(37, 1).with_tau(100.0).rank_window(), 37);
    }

    #[test]
    fn test_hit_probability() {
        let p = SearchParams::new(1000, 1).with_tau(1.0);
        assert_abs_diff_eq!(p.hit_probability(), 0.01, epsilon = 1e-15);
        let full = SearchParams::new(20, 1).with_tau(100.0);
        assert_abs_diff_eq!(full.hit_probability(), 1.0);
        assert_abs_diff_eq!(SearchParams::new(0, 1).hit_probability(), 0.0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SearchParams::new(1000, 1).validate().is_ok());
        assert!(
            SearchParams::new(100, 10)
                .with_tau(10.0)
                .with_alpha(1.0)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_validate_invalid_k() {
        let err = SearchParams::new(10, 0).validate().unwrap_err();
        assert_eq!(err, SizingError::InvalidK { k: 0 });
    }

    #[test]
    fn test_validate_k_exceeds_population() {
        let err = SearchParams::new(5, 6).validate().unwrap_err();
        assert_eq!(err, SizingError::KExceedsPopulation { k: 6, n: 5 });
        let err = SearchParams::new(0, 1).validate().unwrap_err();
        assert_eq!(err, SizingError::KExceedsPopulation { k: 1, n: 0 });
    }

    #[test]
    fn test_validate_invalid_tau() {
        for tau in [0.0, -1.0, 100.5, f64::NAN, f64::INFINITY] {
            let err = SearchParams::new(100, 1).with_tau(tau).validate().unwrap_err();
            assert!(
                matches!(err, SizingError::InvalidTau { .. }),
                "expected InvalidTau for tau={tau}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_validate_invalid_alpha() {
        for alpha in [0.0, -0.2, 1.01, f64::NAN, f64::NEG_INFINITY] {
            let err = SearchParams::new(100, 1)
                .with_alpha(alpha)
                .validate()
                .unwrap_err();
            assert!(
                matches!(err, SizingError::InvalidAlpha { .. }),
                "expected InvalidAlpha for alpha={alpha}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_validate_rank_window_too_small() {
        // 1% of 100 is one point, but five neighbors are requested.
        let err = SearchParams::new(100, 5)
            .with_tau(1.0)
            .validate()
            .unwrap_err();
        assert!(
            matches!(err, SizingError::RankWindowTooSmall { t: 1, k: 5, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_validate_error_priority() {
        // k = 0 and a bad tau: InvalidK is reported first.
        let err = SearchParams::new(10, 0).with_tau(-3.0).validate().unwrap_err();
        assert_eq!(err, SizingError::InvalidK { k: 0 });
        // Bad tau and bad alpha: InvalidTau is reported first.
        let err = SearchParams::new(10, 1)
            .with_tau(0.0)
            .with_alpha(2.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SizingError::InvalidTau { .. }));
    }
}
