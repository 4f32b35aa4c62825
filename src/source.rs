//! Validated source distributions.
//!
//! All input checking lives here. A [`Source`] can only be constructed from
//! a well-formed `(base, probabilities)` pair, so the tree builder, code
//! extractor, and metrics downstream are total functions.

use crate::error::{Error, Result};

/// Tolerance for the probability-sum check.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Largest supported code base. One codeword position is one decimal digit,
/// so bases above ten would need multi-character positions.
pub const MAX_BASE: u32 = 10;

/// A validated discrete source: a code base and per-symbol probabilities.
///
/// Symbol `i` is the index into the probability vector. Symbols with zero
/// probability stay in the vector but are excluded from coding.
#[derive(Debug, Clone)]
pub struct Source {
    base: u32,
    probabilities: Vec<f64>,
    coded: Vec<usize>,
}

impl Source {
    /// Validate `(base, probabilities)` and derive the coded-symbol sublist.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidBase`] when `base` is outside `2..=10`.
    /// * [`Error::EmptyAlphabet`] when no probabilities are supplied.
    /// * [`Error::NegativeProbability`] on the first negative entry.
    /// * [`Error::ProbabilitiesDoNotSumToOne`] when the sum is off by more
    ///   than [`SUM_TOLERANCE`].
    pub fn new(base: u32, probabilities: Vec<f64>) -> Result<Self> {
        if !(2..=MAX_BASE).contains(&base) {
            return Err(Error::InvalidBase(base));
        }
        if probabilities.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        if let Some(&p) = probabilities.iter().find(|&&p| p < 0.0) {
            return Err(Error::NegativeProbability(p));
        }
        let total: f64 = probabilities.iter().sum();
        // A NaN entry makes the whole sum NaN; it must not pass validation.
        if total.is_nan() || (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(Error::ProbabilitiesDoNotSumToOne(total));
        }
        let coded = (0..probabilities.len())
            .filter(|&i| probabilities[i] > 0.0)
            .collect();
        Ok(Self {
            base,
            probabilities,
            coded,
        })
    }

    /// The code base r.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// All symbol probabilities, zero entries included.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Indices of symbols with positive probability, in ascending order.
    pub fn coded_symbols(&self) -> &[usize] {
        &self.coded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_distribution() {
        let source = Source::new(2, vec![0.5, 0.25, 0.25]).unwrap();
        assert_eq!(source.base(), 2);
        assert_eq!(source.coded_symbols(), &[0, 1, 2]);
    }

    #[test]
    fn drops_zero_probability_symbols_from_coding() {
        let source = Source::new(3, vec![0.5, 0.0, 0.5]).unwrap();
        assert_eq!(source.coded_symbols(), &[0, 2]);
        assert_eq!(source.probabilities().len(), 3);
    }

    #[test]
    fn rejects_base_below_two() {
        assert!(matches!(
            Source::new(1, vec![1.0]),
            Err(Error::InvalidBase(1))
        ));
        assert!(matches!(
            Source::new(0, vec![1.0]),
            Err(Error::InvalidBase(0))
        ));
    }

    #[test]
    fn rejects_base_above_ten() {
        assert!(matches!(
            Source::new(11, vec![1.0]),
            Err(Error::InvalidBase(11))
        ));
        assert!(Source::new(10, vec![1.0]).is_ok());
    }

    #[test]
    fn rejects_empty_alphabet() {
        assert!(matches!(Source::new(2, vec![]), Err(Error::EmptyAlphabet)));
    }

    #[test]
    fn rejects_negative_probability() {
        assert!(matches!(
            Source::new(2, vec![-0.1, 0.6, 0.5]),
            Err(Error::NegativeProbability(_))
        ));
    }

    #[test]
    fn rejects_bad_sum() {
        assert!(matches!(
            Source::new(2, vec![0.5, 0.3, 0.1]),
            Err(Error::ProbabilitiesDoNotSumToOne(_))
        ));
    }

    #[test]
    fn rejects_nan_sum() {
        assert!(matches!(
            Source::new(2, vec![f64::NAN, 0.5]),
            Err(Error::ProbabilitiesDoNotSumToOne(_))
        ));
    }

    #[test]
    fn sum_tolerance_is_inclusive() {
        // 1e-7 off is inside tolerance, 2e-6 off is outside.
        assert!(Source::new(2, vec![0.5, 0.5 + 1e-7]).is_ok());
        assert!(Source::new(2, vec![0.5, 0.5 + 2e-6]).is_err());
    }
}
