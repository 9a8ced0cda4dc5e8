use std::fmt::Debug;
use std::hash::Hash;

mod code;
mod coder;
mod coding_error;
mod frequency;
mod tree;

pub use code::CodeTable;
pub use coder::HuffmanCoder;
pub use coding_error::CodingError;
pub use frequency::count_symbols;
pub use tree::HuffmanTree;

/// One unit of the input alphabet.
///
/// Anything copyable that can act as a map key works; `Ord` is required
/// so that tree construction sees the alphabet in a reproducible order.
pub trait Symbol: Copy + Eq + Hash + Ord + Debug {}

impl<T> Symbol for T where T: Copy + Eq + Hash + Ord + Debug {}

/// A symbol paired with its occurrence count in the training sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolFrequency<S> {
    pub symbol: S,
    pub frequency: usize,
}

impl<S> From<(S, usize)> for SymbolFrequency<S> {
    fn from(value: (S, usize)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}
