//! Binomial success-probability model for rank-approximate sampling.
//!
//! A query draws `m` candidates uniformly at random. Each draw lands in the
//! rank window (the best `t` of `n` points) with probability `eps = t / n`,
//! so the number of window hits is `Binomial(m, eps)`.

/// Probability that `m` uniform draws contain at least `k` points from the
/// rank window of size `t` in a population of `n`.
///
/// ```text
/// P = Σ_{j=k}^{m} C(m, j) · eps^j · (1 − eps)^(m−j),   eps = t / n
/// ```
///
/// # Saturation
///
/// | Case | Result |
/// |------|--------|
/// | `k = 0` | `1.0` |
/// | `k = 1`, `m > n − t` | `1.0` |
/// | `k > 1`, `m < k` | `0.0` |
/// | `k > 1`, `m > n − t + k − 1` | `1.0` |
///
/// Otherwise the shorter of the two sums is evaluated: the lower tail
/// `j = 0..k` (subtracted from one) when `2k < m`, the upper tail `j = k..=m`
/// otherwise.
///
/// The result is not clamped. For extreme `m` and `k` the accumulated sum
/// can land marginally outside `[0, 1]`.
///
/// # Panics
///
/// Debug-asserts that `t <= n`.
pub fn success_probability(n: usize, k: usize, m: usize, t: usize) -> f64 {
    debug_assert!(t <= n, "rank window {t} exceeds population {n}");

    if k == 1 {
        if m > n - t {
            return 1.0;
        }
        let eps = t as f64 / n as f64;
        return 1.0 - (1.0 - eps).powf(m as f64);
    }

    if k == 0 {
        return 1.0;
    }
    if m < k {
        return 0.0;
    }
    if m > n - t + (k - 1) {
        return 1.0;
    }

    let eps = t as f64 / n as f64;

    if 2 * k < m {
        // Lower tail: j = 0 seeds the sum, j = 1..k accumulate.
        let mut sum = (1.0 - eps).powf(m as f64);
        for j in 1..k {
            sum += binomial_term(m, j, j, eps);
        }
        1.0 - sum
    } else {
        // Upper tail: j = m seeds the sum, j = k..m accumulate.
        let mut sum = eps.powf(m as f64);
        for j in k..m {
            sum += binomial_term(m, j, m - j, eps);
        }
        sum
    }
}

/// Lower binomial tail `Σ_{j=0}^{k−1} C(m, j) · eps^j · (1 − eps)^(m−j)`.
///
/// The complement of [`success_probability`] outside its saturation
/// branches. Returns 0.0 for `k = 0` and sums at most up to `j = m`.
pub fn binomial_lower_tail(m: usize, k: usize, eps: f64) -> f64 {
    let upper = k.min(m.saturating_add(1));
    (0..upper)
        .map(|j| binomial_term(m, j, j.min(m - j), eps))
        .sum()
}

/// One binomial term `C(m, j) · eps^j · (1 − eps)^(m−j)`.
///
/// `choose` is the index the coefficient is built from: `j` or `m − j`,
/// both give the same value.
#[inline]
fn binomial_term(m: usize, j: usize, choose: usize, eps: f64) -> f64 {
    binomial_coefficient(m, choose) * eps.powf(j as f64) * (1.0 - eps).powf((m - j) as f64)
}

/// `C(m, j)` as a running product `m · (m−1)/2 · (m−2)/3 ⋯`.
///
/// Interleaves multiplication and division so intermediate values stay close
/// to the partial coefficients instead of growing like factorials.
pub(crate) fn binomial_coefficient(m: usize, j: usize) -> f64 {
    if j == 0 {
        return 1.0;
    }
    let mut c = m as f64;
    for i in 2..=j {
        c *= (m - (i - 1)) as f64;
        c /= i as f64;
    }
    c
}
