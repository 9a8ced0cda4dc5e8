use std::fmt;
use std::str::FromStr;

use crate::huffman::CodingError;

/// An in-memory sequence of single bits, packed MSB-first into bytes.
///
/// The sequence carries an exact bit length, so it can represent
/// codeword concatenations that do not end on a byte boundary without
/// any framing or padding.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    /// packed bit storage, most significant bit first
    blocks: Vec<u8>,
    /// how many bits of `blocks` are in use
    bit_len: usize,
}

impl BitSequence {
    pub fn new() -> BitSequence {
        BitSequence {
            blocks: Vec::new(),
            bit_len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    pub fn push(&mut self, bit: bool) {
        let block_index = self.bit_len / 8;
        if block_index == self.blocks.len() {
            self.blocks.push(0);
        }
        if bit {
            self.blocks[block_index] |= 0b10000000_u8.rotate_right((self.bit_len % 8) as u32);
        }
        self.bit_len += 1;
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_len {
            return None;
        }
        let mask = 0b10000000_u8.rotate_right((index % 8) as u32);
        Some(self.blocks[index / 8] & mask > 0)
    }

    /// Append every bit of `other` in order.
    pub fn extend_from(&mut self, other: &BitSequence) {
        for bit in other.iter() {
            self.push(bit);
        }
    }

    pub fn starts_with(&self, prefix: &BitSequence) -> bool {
        prefix.len() <= self.len() && prefix.iter().zip(self.iter()).all(|(a, b)| a == b)
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits {
            sequence: self,
            position: 0,
        }
    }

    /// Byte-aligned copy of the storage, zero-padded up to the next byte.
    ///
    /// Padding is a persistence concern only; the logical sequence keeps
    /// its exact bit length.
    pub fn to_padded_bytes(&self) -> Vec<u8> {
        self.blocks.clone()
    }

    /// Rebuild a sequence from byte-aligned storage and its exact bit
    /// length. Returns `None` if the byte count does not match the
    /// length.
    pub fn from_padded_bytes(bytes: &[u8], bit_len: usize) -> Option<BitSequence> {
        if bytes.len() != bit_len.div_ceil(8) {
            return None;
        }
        let mut blocks = bytes.to_vec();
        let used_bits_in_last_block = bit_len % 8;
        if used_bits_in_last_block != 0 {
            if let Some(last) = blocks.last_mut() {
                // padding bits carry no information, keep them zeroed
                *last &= 0xFF << (8 - used_bits_in_last_block);
            }
        }
        Some(BitSequence { blocks, bit_len })
    }
}

/// Iterator over the bits of a [`BitSequence`], front to back.
pub struct Bits<'a> {
    sequence: &'a BitSequence,
    position: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.sequence.get(self.position)?;
        self.position += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSequence({})", self)
    }
}

impl FromStr for BitSequence {
    type Err = CodingError;

    fn from_str(s: &str) -> Result<BitSequence, Self::Err> {
        let mut bits = BitSequence::new();
        for (position, character) in s.chars().enumerate() {
            match character {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(CodingError::MalformedBitInput(character, position)),
            }
        }
        Ok(bits)
    }
}
