//! r-ary Huffman tree construction.
//!
//! Greedy bottom-up merging over a min-priority queue keyed by probability.
//! Before merging starts, the queue is padded with zero-probability dummy
//! leaves so that every merge, including the last, consumes exactly r nodes.
//! Ties resolve by insertion sequence, so repeated runs over the same source
//! produce identical trees.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::source::Source;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A terminal node carrying one symbol's probability mass.
    Leaf {
        /// Probability mass at this leaf.
        probability: f64,
        /// Index of the source symbol; `None` marks a dummy pad.
        symbol: Option<usize>,
    },
    /// A merge of r nodes, ordered least probable first.
    Internal {
        /// Sum of the children's probabilities.
        probability: f64,
        /// Children in extraction order.
        children: Vec<Node>,
    },
}

impl Node {
    /// Probability mass under this node.
    pub fn probability(&self) -> f64 {
        match self {
            Node::Leaf { probability, .. } => *probability,
            Node::Internal { probability, .. } => *probability,
        }
    }
}

/// Heap entry reversed into a min-queue, with the insertion sequence as the
/// deterministic secondary key.
#[derive(Debug)]
struct QueueEntry {
    node: Node,
    seq: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .probability()
            .total_cmp(&self.node.probability())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// Build the Huffman tree for `source`.
///
/// Returns `None` when the source has no coded symbols. A single coded
/// symbol yields a bare leaf root; the extractor assigns it the
/// conventional codeword "0".
pub fn build(source: &Source) -> Option<Node> {
    let r = source.base() as usize;
    let mut queue = BinaryHeap::new();
    let mut seq = 0u64;

    for &i in source.coded_symbols() {
        queue.push(QueueEntry {
            node: Node::Leaf {
                probability: source.probabilities()[i],
                symbol: Some(i),
            },
            seq,
        });
        seq += 1;
    }
    if queue.is_empty() {
        return None;
    }

    // Each merge replaces r nodes with 1, shrinking the queue by r - 1, so
    // the start size must be congruent to 1 mod (r - 1) for exactly one
    // node to remain. Pad with dummies until it is. No-op for r = 2.
    while (queue.len() - 1) % (r - 1) != 0 {
        queue.push(QueueEntry {
            node: Node::Leaf {
                probability: 0.0,
                symbol: None,
            },
            seq,
        });
        seq += 1;
    }

    while queue.len() > 1 {
        let mut children = Vec::with_capacity(r);
        let mut probability = 0.0;
        for _ in 0..r {
            // Padding guarantees the queue holds at least r entries here.
            let entry = queue.pop().unwrap();
            probability += entry.node.probability();
            children.push(entry.node);
        }
        queue.push(QueueEntry {
            node: Node::Internal {
                probability,
                children,
            },
            seq,
        });
        seq += 1;
    }

    queue.pop().map(|entry| entry.node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_count(node: &Node) -> (usize, usize) {
        match node {
            Node::Leaf { symbol: Some(_), .. } => (1, 0),
            Node::Leaf { symbol: None, .. } => (0, 1),
            Node::Internal { children, .. } => children.iter().fold((0, 0), |(real, dummy), c| {
                let (r, d) = leaf_count(c);
                (real + r, dummy + d)
            }),
        }
    }

    fn depth_of(node: &Node, symbol: usize, depth: usize) -> Option<usize> {
        match node {
            Node::Leaf { symbol: Some(s), .. } if *s == symbol => Some(depth),
            Node::Leaf { .. } => None,
            Node::Internal { children, .. } => children
                .iter()
                .find_map(|c| depth_of(c, symbol, depth + 1)),
        }
    }

    #[test]
    fn binary_build_needs_no_padding() {
        let source = Source::new(2, vec![0.5, 0.25, 0.25]).unwrap();
        let root = build(&source).unwrap();
        assert_eq!(leaf_count(&root), (3, 0));
    }

    #[test]
    fn quaternary_build_pads_five_symbols_with_two_dummies() {
        let source = Source::new(4, vec![0.4, 0.2, 0.2, 0.1, 0.1]).unwrap();
        let root = build(&source).unwrap();
        assert_eq!(leaf_count(&root), (5, 2));
    }

    #[test]
    fn root_probability_is_total_mass() {
        let source = Source::new(3, vec![0.25, 0.25, 0.2, 0.15, 0.15]).unwrap();
        let root = build(&source).unwrap();
        assert!((root.probability() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn internal_probability_sums_children() {
        let source = Source::new(2, vec![0.4, 0.35, 0.2, 0.05]).unwrap();
        let root = build(&source).unwrap();
        fn check(node: &Node) {
            if let Node::Internal {
                probability,
                children,
            } = node
            {
                let sum: f64 = children.iter().map(Node::probability).sum();
                assert!((probability - sum).abs() < 1e-12);
                children.iter().for_each(check);
            }
        }
        check(&root);
    }

    #[test]
    fn single_symbol_yields_bare_leaf() {
        let source = Source::new(2, vec![1.0]).unwrap();
        let root = build(&source).unwrap();
        assert_eq!(
            root,
            Node::Leaf {
                probability: 1.0,
                symbol: Some(0),
            }
        );
    }

    #[test]
    fn equal_probabilities_break_ties_by_insertion_order() {
        let source = Source::new(2, vec![0.25; 4]).unwrap();
        let root = build(&source).unwrap();
        // First merge takes symbols 0 and 1, second takes 2 and 3, and the
        // (0,1) subtree was inserted first so it sits on the 0 side.
        assert_eq!(depth_of(&root, 0, 0), Some(2));
        assert_eq!(depth_of(&root, 3, 0), Some(2));
        if let Node::Internal { children, .. } = &root {
            let (left_real, _) = leaf_count(&children[0]);
            assert_eq!(left_real, 2);
            assert!(depth_of(&children[0], 0, 0).is_some());
            assert!(depth_of(&children[0], 1, 0).is_some());
        } else {
            panic!("root of a four-symbol source must be internal");
        }
    }

    #[test]
    fn repeated_builds_are_identical() {
        let probs = vec![0.3, 0.3, 0.2, 0.1, 0.1];
        let a = build(&Source::new(3, probs.clone()).unwrap()).unwrap();
        let b = build(&Source::new(3, probs).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
