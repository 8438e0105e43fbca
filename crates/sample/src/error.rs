//! Error types for the rann-sample crate.

/// Error type for all fallible operations in the rann-sample crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    /// Returned when the index range `[0, upper)` is empty.
    #[error("range upper bound must be >= 1, got 0")]
    EmptyRange,
}
