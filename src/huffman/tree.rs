use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;

use crate::binary_stream::BitSequence;

use super::{CodingError, Symbol, SymbolFrequency};

#[derive(Clone, Copy)]
pub(super) enum NodeKind<S> {
    Leaf { symbol: S },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy)]
pub(super) struct Node<S> {
    pub(super) frequency: usize,
    pub(super) index: usize,
    pub(super) kind: NodeKind<S>,
}

/// Binary coding tree whose root-to-leaf paths define the codewords.
///
/// Nodes live in an arena; children are referenced by index. A tree
/// over an alphabet of size k holds exactly k leaves and k - 1 inner
/// nodes (none for k = 1, where the root itself is the lone leaf).
pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
    root_index: usize,
}

impl<S> Ord for Node<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then(self.index.cmp(&other.index))
    }
}

impl<S> PartialOrd for Node<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for Node<S> {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.index == other.index
    }
}

impl<S> Eq for Node<S> {}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree by repeatedly merging the two lowest-count
    /// candidates of a min-heap until a single root remains.
    ///
    /// Candidates of equal count are ordered by arena index. Leaves are
    /// inserted in the order given (sorted by symbol when coming from
    /// `count_symbols`) and merged nodes receive strictly increasing
    /// indices, so two builds from the same frequency table produce the
    /// same shape. The first candidate removed becomes the left child.
    pub fn new(symbol_frequencies: &[SymbolFrequency<S>]) -> Result<HuffmanTree<S>, CodingError> {
        if symbol_frequencies.is_empty() {
            return Err(CodingError::EmptyInput);
        }
        let mut heap = BinaryHeap::new();
        let mut nodes: Vec<Node<S>> = vec![];

        for sf in symbol_frequencies.iter() {
            let node = Node {
                frequency: sf.frequency,
                index: nodes.len(),
                kind: NodeKind::Leaf { symbol: sf.symbol },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        // merge nodes until only the root is left
        while heap.len() > 1 {
            let first = heap.pop().unwrap().0;
            let second = heap.pop().unwrap().0;
            let node = Node {
                frequency: first.frequency + second.frequency,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: first.index,
                    right: second.index,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        let root_index = heap.pop().unwrap().0.index;
        Ok(HuffmanTree { nodes, root_index })
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Leaf { .. }))
            .count()
    }

    /// Combined count at the root, i.e. the training sequence length.
    pub fn total_frequency(&self) -> usize {
        self.nodes[self.root_index].frequency
    }

    pub(super) fn root(&self) -> Node<S> {
        self.nodes[self.root_index]
    }

    pub(super) fn node(&self, index: usize) -> Node<S> {
        self.nodes[index]
    }

    /// Walk the tree bit by bit: a 0 steps to the left child, a 1 to
    /// the right; reaching a leaf emits its symbol and restarts the
    /// descent at the root.
    ///
    /// The input must end exactly on a completed codeword, otherwise
    /// the stream is truncated and decoding fails.
    pub fn decode_sequence(&self, bits: &BitSequence) -> Result<Vec<S>, CodingError> {
        let mut decoded = Vec::new();
        if self.nodes.len() == 1 {
            // Lone-leaf tree: the solitary symbol owns the one-bit
            // codeword 0, so each consumed bit stands for one occurrence.
            if let NodeKind::Leaf { symbol } = self.nodes[self.root_index].kind {
                decoded.resize(bits.len(), symbol);
            }
            return Ok(decoded);
        }
        let mut current_index = self.root_index;
        for take_right in bits.iter() {
            current_index = match self.nodes[current_index].kind {
                NodeKind::Inner { left, right } => {
                    if take_right {
                        right
                    } else {
                        left
                    }
                }
                NodeKind::Leaf { .. } => {
                    unreachable!("descent always restarts at the root, which is an inner node here")
                }
            };
            if let NodeKind::Leaf { symbol } = self.nodes[current_index].kind {
                decoded.push(symbol);
                current_index = self.root_index;
            }
        }
        if current_index != self.root_index {
            return Err(CodingError::TruncatedBitInput);
        }
        Ok(decoded)
    }
}
