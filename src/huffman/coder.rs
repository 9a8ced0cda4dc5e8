use crate::binary_stream::BitSequence;

use super::code::CodeTable;
use super::frequency::count_symbols;
use super::tree::HuffmanTree;
use super::{CodingError, Symbol, SymbolFrequency};

/// Bundles one coding tree with its derived code table.
///
/// Both are fixed at construction and always describe the same
/// frequency distribution. `encode_sequence` and `decode_sequence` keep
/// all traversal state local to the call, so a shared coder can be used
/// from several threads without synchronization.
pub struct HuffmanCoder<S> {
    tree: HuffmanTree<S>,
    table: CodeTable<S>,
}

impl<S: Symbol> HuffmanCoder<S> {
    /// Derive tree and table from a training sequence.
    pub fn new(training_sequence: &[S]) -> Result<HuffmanCoder<S>, CodingError> {
        let frequencies = count_symbols(training_sequence)?;
        Self::from_frequencies(&frequencies)
    }

    /// Build from an explicit frequency table, e.g. one read back from
    /// a compressed container. Equal tables yield equal codewords.
    pub fn from_frequencies(
        frequencies: &[SymbolFrequency<S>],
    ) -> Result<HuffmanCoder<S>, CodingError> {
        let tree = HuffmanTree::new(frequencies)?;
        let table = CodeTable::from_tree(&tree);
        Ok(HuffmanCoder { tree, table })
    }

    /// Concatenate the codewords of `sequence` in order, with no
    /// framing or padding. Symbols absent from the table fail the whole
    /// call, there is no escape coding.
    pub fn encode_sequence(&self, sequence: &[S]) -> Result<BitSequence, CodingError> {
        let mut bits = BitSequence::new();
        for symbol in sequence {
            let codeword = self
                .table
                .codeword(symbol)
                .ok_or_else(|| CodingError::UnknownSymbol(format!("{:?}", symbol)))?;
            bits.extend_from(codeword);
        }
        Ok(bits)
    }

    pub fn decode_sequence(&self, bits: &BitSequence) -> Result<Vec<S>, CodingError> {
        self.tree.decode_sequence(bits)
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }
}

#[cfg(test)]
mod test {
    use super::{CodingError, HuffmanCoder};
    use crate::binary_stream::BitSequence;

    #[test]
    fn test_encode_matches_expected_bit_string() {
        let coder = HuffmanCoder::new(b"aabacabaaa").expect("input is not empty");
        let bits = coder.encode_sequence(b"aabacabaaa").unwrap();
        assert_eq!(bits.to_string(), "1101100101111");
    }

    #[test]
    fn test_round_trip() {
        let sequence = b"the quick brown fox jumps over the lazy dog";
        let coder = HuffmanCoder::new(sequence).expect("input is not empty");
        let bits = coder.encode_sequence(sequence).unwrap();
        let decoded = coder.decode_sequence(&bits).unwrap();
        assert_eq!(decoded, sequence);
    }

    #[test]
    fn test_round_trip_of_sequence_other_than_training_input() {
        let coder = HuffmanCoder::new(b"aabacabaaa").expect("input is not empty");
        let bits = coder.encode_sequence(b"cabba").unwrap();
        let decoded = coder.decode_sequence(&bits).unwrap();
        assert_eq!(decoded, b"cabba");
    }

    #[test]
    fn test_single_symbol_round_trip() {
        let coder = HuffmanCoder::new(b"aaaa").expect("input is not empty");
        let bits = coder.encode_sequence(b"aaaa").unwrap();
        assert_eq!(bits.to_string(), "0000");
        let decoded = coder.decode_sequence(&bits).unwrap();
        assert_eq!(decoded, b"aaaa");
    }

    #[test]
    fn test_unknown_symbol_fails_encoding() {
        let coder = HuffmanCoder::new(b"aabacabaaa").expect("input is not empty");
        let result = coder.encode_sequence(b"abd");
        assert!(matches!(result, Err(CodingError::UnknownSymbol(_))));
    }

    #[test]
    fn test_empty_training_sequence_is_rejected() {
        let result = HuffmanCoder::<u8>::new(&[]);
        assert!(matches!(result, Err(CodingError::EmptyInput)));
    }

    #[test]
    fn test_decoding_truncated_input_fails() {
        let coder = HuffmanCoder::new(b"aabacabaaa").expect("input is not empty");
        let bits = coder.encode_sequence(b"aabac").unwrap();
        let mut truncated = BitSequence::new();
        for bit in bits.iter().take(bits.len() - 1) {
            truncated.push(bit);
        }
        let result = coder.decode_sequence(&truncated);
        assert!(matches!(result, Err(CodingError::TruncatedBitInput)));
    }

    #[test]
    fn test_two_builds_from_the_same_input_agree() {
        let sequence = b"deterministic tie breaking makes codewords reproducible";
        let first = HuffmanCoder::new(sequence).unwrap();
        let second = HuffmanCoder::new(sequence).unwrap();
        for (symbol, codeword) in first.table().iter() {
            let other = second
                .table()
                .codeword(symbol)
                .expect("both tables cover the same alphabet");
            assert_eq!(
                codeword, other,
                "codeword of symbol {} differs between builds",
                symbol
            );
        }
    }

    #[test]
    fn test_decode_of_documented_example() {
        let coder = HuffmanCoder::new(b"aabacabaaa").unwrap();
        let bits: BitSequence = "1101100101111".parse().unwrap();
        let decoded = coder.decode_sequence(&bits).unwrap();
        assert_eq!(decoded, b"aabacabaaa");
    }
}
