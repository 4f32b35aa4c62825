//! Error types for r-ary prefix code construction.

use thiserror::Error;

/// Error variants for code construction.
///
/// All of these originate in input validation; once a [`Source`](crate::Source)
/// exists, the tree builder, code extractor, and metrics cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The code base is outside the supported range.
    #[error("invalid base {0}: supported range is 2..=10")]
    InvalidBase(u32),

    /// No symbol probabilities were supplied.
    #[error("empty alphabet: at least one probability is required")]
    EmptyAlphabet,

    /// A symbol probability is negative.
    #[error("negative probability: {0}")]
    NegativeProbability(f64),

    /// The probabilities do not sum to one within tolerance.
    #[error("probabilities sum to {0}, expected 1 within 1e-6")]
    ProbabilitiesDoNotSumToOne(f64),
}

/// A specialized Result type for code construction.
pub type Result<T> = std::result::Result<T, Error>;
