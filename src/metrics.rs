//! Information-theoretic quality metrics for a constructed code.

use crate::codebook::Codebook;
use crate::source::Source;

/// Entropy and expected codeword length of a code, with efficiency derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Source entropy in base-r digits per symbol.
    pub entropy: f64,
    /// Probability-weighted mean codeword length.
    pub avg_length: f64,
}

impl Metrics {
    /// Evaluate `codebook` against the source distribution.
    pub fn evaluate(source: &Source, codebook: &Codebook) -> Self {
        Self {
            entropy: entropy(source.probabilities(), source.base()),
            avg_length: expected_length(source.probabilities(), codebook),
        }
    }

    /// Entropy over expected length; `None` when nothing was coded.
    pub fn efficiency(&self) -> Option<f64> {
        (self.avg_length > 0.0).then(|| self.entropy / self.avg_length)
    }
}

/// Entropy of `probabilities` in base-`base` digits.
///
/// Computed as p · ln(1/p) / ln r per symbol. Zero entries contribute
/// nothing (the p · log(1/p) term vanishes by continuity).
pub fn entropy(probabilities: &[f64], base: u32) -> f64 {
    let ln_base = f64::from(base).ln();
    probabilities
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * (1.0 / p).ln() / ln_base)
        .sum()
}

/// Expected codeword length of `codebook` under `probabilities`.
///
/// Symbols without a codeword (zero probability) contribute nothing.
pub fn expected_length(probabilities: &[f64], codebook: &Codebook) -> f64 {
    probabilities
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p > 0.0)
        .map(|(i, &p)| p * codebook.get(i).map_or(0, str::len) as f64)
        .sum()
}
