//! Uniform distinct-index sampling for rank-approximate neighbor search.
//!
//! Once a query knows how many candidates it must examine, it draws that
//! many indices uniformly with replacement and inspects the distinct points
//! hit. The random source is always passed in by the caller, so a seeded
//! generator gives reproducible draws and concurrent queries use their own
//! streams.
//!
//! # Quick start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rann_sample::obtain_distinct_samples;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let indices = obtain_distinct_samples(300, 1000, &mut rng).unwrap();
//! assert!(indices.len() <= 300);
//! assert!(indices.iter().all(|&i| i < 1000));
//! ```
//!
//! For query loops over one population, use
//! [`obtain_distinct_samples_with_scratch`] with a reusable
//! [`SampleScratch`].

pub mod distinct;
pub mod error;

pub use distinct::{SampleScratch, obtain_distinct_samples, obtain_distinct_samples_with_scratch};
pub use error::SampleError;
