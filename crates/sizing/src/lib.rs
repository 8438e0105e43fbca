//! Sample sizing for rank-approximate nearest-neighbor (RANN) search.
//!
//! A RANN query accepts any neighbor from the top `tau` percent of the
//! population (the rank window) instead of the exact nearest. Sampling `m`
//! points uniformly, the number that land in the window is binomial with
//! hit probability `t / n`. This crate models that probability and inverts
//! it to the smallest `m` reaching a target confidence `alpha`.
//!
//! | Item | Role |
//! |------|------|
//! | [`success_probability`] | `P(at least k of m draws in the window)` |
//! | [`minimum_samples_reqd`] | raw bounded search over `m` |
//! | [`sample_size`] | validated search over [`SearchParams`] |
//!
//! # Quick start
//!
//! ```
//! use rann_sizing::{SearchParams, sample_size};
//!
//! let params = SearchParams::new(1000, 1).with_tau(1.0).with_alpha(0.95);
//! let size = sample_size(&params).unwrap();
//! assert_eq!(size.rank_window(), 10);
//! assert!(size.samples() > 1 && size.samples() <= 1000);
//! ```
//!
//! # Architecture
//!
//! ```text
//! sample_size()
//!   ├─ SearchParams::validate()   (params.rs)
//!   └─ search()                   (solver.rs)
//!        └─ success_probability() (probability.rs)
//! ```

pub mod error;
pub mod params;
pub mod probability;
pub mod result;
pub mod solver;

pub use error::SizingError;
pub use params::{DEFAULT_ALPHA, DEFAULT_TAU, SearchParams};
pub use probability::{binomial_lower_tail, success_probability};
pub use result::SampleSize;
pub use solver::{minimum_samples_reqd, sample_size};
