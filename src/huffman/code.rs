use std::collections::HashMap;

use crate::binary_stream::BitSequence;

use super::tree::{HuffmanTree, Node, NodeKind};
use super::Symbol;

/// Immutable symbol-to-codeword mapping derived from one coding tree.
///
/// Codewords are prefix-free by tree shape: a path ending in a leaf can
/// never continue into another leaf.
pub struct CodeTable<S> {
    codewords: HashMap<S, BitSequence>,
}

impl<S: Symbol> CodeTable<S> {
    /// Derive one codeword per leaf: a 0 is appended when descending
    /// into the left child, a 1 for the right child.
    ///
    /// A lone leaf sits directly at the root where the path would be
    /// empty; it gets the fixed one-bit codeword 0 instead, so that the
    /// encode/decode round trip stays unambiguous.
    pub fn from_tree(tree: &HuffmanTree<S>) -> CodeTable<S> {
        let mut codewords = HashMap::new();
        let root = tree.root();
        if let NodeKind::Leaf { symbol } = root.kind {
            let mut path = BitSequence::new();
            path.push(false);
            codewords.insert(symbol, path);
            return CodeTable { codewords };
        }
        fill_codewords(&mut codewords, root, tree, BitSequence::new());
        CodeTable { codewords }
    }

    pub fn codeword(&self, symbol: &S) -> Option<&BitSequence> {
        self.codewords.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codewords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitSequence)> {
        self.codewords.iter()
    }
}

// The path accumulator is passed by value: each branch extends its own
// copy, so no restore step is needed after a recursive return.
fn fill_codewords<S: Symbol>(
    codewords: &mut HashMap<S, BitSequence>,
    node: Node<S>,
    tree: &HuffmanTree<S>,
    path: BitSequence,
) {
    match node.kind {
        NodeKind::Leaf { symbol } => {
            codewords.insert(symbol, path);
        }
        NodeKind::Inner { left, right } => {
            let mut left_path = path.clone();
            left_path.push(false);
            fill_codewords(codewords, tree.node(left), tree, left_path);
            let mut right_path = path;
            right_path.push(true);
            fill_codewords(codewords, tree.node(right), tree, right_path);
        }
    }
}
