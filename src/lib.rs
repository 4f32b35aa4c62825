//! # r-ary Huffman Codes
//!
//! *Optimal prefix codes over any digit alphabet, with entropy accounting.*
//!
//! ## Intuition First
//!
//! Imagine labeling the leaves of a tree where every internal node has r
//! outgoing edges numbered 0 through r−1. Reading the edge labels from the
//! root down to a leaf spells a string of digits, and because symbols only
//! live at leaves, no spelled string can be the beginning of another. That
//! is a prefix code: a receiver can cut a digit stream back into symbols
//! without any separators.
//!
//! Huffman's construction builds the tree bottom-up: repeatedly merge the r
//! least probable subtrees into one. Rare symbols get merged early and sink
//! deep (long codewords); common symbols get merged late and stay shallow
//! (short codewords). The subtlety for r > 2 is a counting argument: each
//! merge turns r nodes into 1, shrinking the pool by r − 1, so the pool must
//! start at 1 mod (r − 1) or the final merge comes up short. Zero-probability
//! dummy leaves pad the pool to make the arithmetic work without disturbing
//! optimality.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon   Entropy as the limit on expected code length
//! 1949  Fano      Top-down splitting: close to optimal, not quite there
//! 1952  Huffman   Optimal prefix codes by bottom-up merging, binary and r-ary
//! ```
//!
//! David Huffman worked the construction out as a term paper at MIT,
//! sidestepping the top-down approach his professor (Fano) had published.
//! The original paper already treats the general r-ary case, dummy symbols
//! included.
//!
//! ## Mathematical Formulation
//!
//! For symbol probabilities $p_i$ the entropy in base r,
//!
//! ```text
//! H_r = \sum_{p_i > 0} p_i \log_r(1 / p_i)
//! ```
//!
//! lower-bounds the expected codeword length $L = \sum p_i \ell_i$ of every
//! r-ary prefix code, and Huffman's tree attains $H_r \le L < H_r + 1$. The
//! ratio $\eta = H_r / L$ is the code's efficiency, reaching 1 exactly when
//! every $p_i$ is a power of $1/r$.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n \log n)$ for the heap-driven merging.
//! - **Space**: $O(n)$ tree nodes plus the codeword strings.
//!
//! ## Failure Modes
//!
//! 1. **Malformed input**: base outside 2..=10, an empty alphabet, negative
//!    probabilities, or a sum away from 1 — all rejected up front by
//!    [`Source::new`].
//! 2. **Degenerate source**: a single certain symbol has zero entropy; it
//!    still gets the one-digit codeword "0" so the code remains usable.
//!
//! ## Implementation Notes
//!
//! The pipeline is a pure function in four stages: validation
//! ([`Source`]) → tree construction ([`build`]) → codeword extraction
//! ([`extract`]) → metrics ([`Metrics`]). [`compute`] runs all four.
//! Tie-breaks in the merge queue resolve by insertion order, so equal inputs
//! produce byte-identical codebooks.
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes." Proceedings of the IRE 40.9.
//! - Cover, T. M., Thomas, J. A. (2006). "Elements of Information Theory,"
//!   ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codebook;
pub mod error;
pub mod metrics;
pub mod source;
pub mod tree;

pub use codebook::{extract, Codebook};
pub use error::{Error, Result};
pub use metrics::Metrics;
pub use source::Source;
pub use tree::{build, Node};

/// Everything [`compute`] reports for one source distribution.
#[derive(Debug, Clone)]
pub struct CodeAnalysis {
    /// Symbol index → codeword digit string.
    pub codebook: Codebook,
    /// Source entropy in base-r digits per symbol.
    pub entropy: f64,
    /// Probability-weighted mean codeword length.
    pub avg_length: f64,
    /// `entropy / avg_length`; `None` when nothing was coded.
    pub efficiency: Option<f64>,
}

/// Construct the optimal base-`base` prefix code for `probabilities` and
/// evaluate it.
///
/// # Errors
///
/// Fails only on invalid input; see [`Error`] for the taxonomy.
///
/// # Examples
///
/// ```
/// let analysis = rhuff::compute(2, &[0.5, 0.25, 0.25])?;
/// assert_eq!(analysis.codebook.get(0), Some("0"));
/// assert!((analysis.efficiency.unwrap() - 1.0).abs() < 1e-9);
/// # Ok::<(), rhuff::Error>(())
/// ```
pub fn compute(base: u32, probabilities: &[f64]) -> Result<CodeAnalysis> {
    let source = Source::new(base, probabilities.to_vec())?;
    let codebook = match tree::build(&source) {
        Some(root) => codebook::extract(&root),
        None => Codebook::default(),
    };
    let metrics = Metrics::evaluate(&source, &codebook);
    Ok(CodeAnalysis {
        codebook,
        entropy: metrics.entropy,
        avg_length: metrics.avg_length,
        efficiency: metrics.efficiency(),
    })
}
