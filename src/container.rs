//! Persisted representation of a compressed byte stream.
//!
//! The core exchanges raw bit sequences only; this module owns the
//! external format. Layout, all integers little endian:
//!
//! - u32 number of distinct symbols k
//! - k pairs of (u8 symbol, u64 count)
//! - u64 exact payload length in bits
//! - payload bits, zero-padded to full bytes
//!
//! The frequency table lets expansion rebuild the identical coding tree
//! deterministically, so no codeword table is stored.

use std::io::{Read, Write};

use crate::binary_stream::BitSequence;
use crate::error::Error;
use crate::huffman::SymbolFrequency;
use crate::Result;

pub fn write_container<W: Write>(
    writer: &mut W,
    frequencies: &[SymbolFrequency<u8>],
    bits: &BitSequence,
) -> Result<()> {
    let symbol_count = frequencies.len() as u32;
    writer
        .write_all(&symbol_count.to_le_bytes())
        .map_err(Error::FailedToWriteOutputFile)?;
    for frequency in frequencies {
        writer
            .write_all(&[frequency.symbol])
            .map_err(Error::FailedToWriteOutputFile)?;
        writer
            .write_all(&(frequency.frequency as u64).to_le_bytes())
            .map_err(Error::FailedToWriteOutputFile)?;
    }
    writer
        .write_all(&(bits.len() as u64).to_le_bytes())
        .map_err(Error::FailedToWriteOutputFile)?;
    writer
        .write_all(&bits.to_padded_bytes())
        .map_err(Error::FailedToWriteOutputFile)?;
    Ok(())
}

pub fn read_container<R: Read>(reader: &mut R) -> Result<(Vec<SymbolFrequency<u8>>, BitSequence)> {
    let symbol_count = read_u32(reader)? as usize;
    let mut frequencies = Vec::with_capacity(symbol_count);
    for _ in 0..symbol_count {
        let mut symbol = [0u8; 1];
        reader
            .read_exact(&mut symbol)
            .map_err(Error::ContainerTruncated)?;
        let count = read_u64(reader)? as usize;
        frequencies.push(SymbolFrequency::from((symbol[0], count)));
    }
    let bit_len = read_u64(reader)? as usize;
    let mut payload = vec![0u8; bit_len.div_ceil(8)];
    reader
        .read_exact(&mut payload)
        .map_err(Error::ContainerTruncated)?;
    let bits = BitSequence::from_padded_bytes(&payload, bit_len)
        .ok_or(Error::ContainerPayloadSizeMismatch)?;
    Ok((frequencies, bits))
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut buffer = [0u8; 4];
    reader
        .read_exact(&mut buffer)
        .map_err(Error::ContainerTruncated)?;
    Ok(u32::from_le_bytes(buffer))
}

fn read_u64<R: Read>(reader: &mut R) -> Result<u64> {
    let mut buffer = [0u8; 8];
    reader
        .read_exact(&mut buffer)
        .map_err(Error::ContainerTruncated)?;
    Ok(u64::from_le_bytes(buffer))
}

#[cfg(test)]
mod test {
    use super::{read_container, write_container};
    use crate::error::Error;
    use crate::huffman::{count_symbols, HuffmanCoder};

    #[test]
    fn test_container_round_trip() {
        let sequence = b"aabacabaaa";
        let frequencies = count_symbols(sequence).unwrap();
        let coder = HuffmanCoder::from_frequencies(&frequencies).unwrap();
        let bits = coder.encode_sequence(sequence).unwrap();

        let mut container: Vec<u8> = Vec::new();
        write_container(&mut container, &frequencies, &bits).expect("writing to a vec never fails");

        let (read_frequencies, read_bits) =
            read_container(&mut container.as_slice()).expect("container is well formed");
        assert_eq!(read_frequencies, frequencies);
        assert_eq!(read_bits, bits);
    }

    #[test]
    fn test_reading_truncated_container_fails() {
        let sequence = b"aabacabaaa";
        let frequencies = count_symbols(sequence).unwrap();
        let coder = HuffmanCoder::from_frequencies(&frequencies).unwrap();
        let bits = coder.encode_sequence(sequence).unwrap();

        let mut container: Vec<u8> = Vec::new();
        write_container(&mut container, &frequencies, &bits).unwrap();
        container.pop();

        let result = read_container(&mut container.as_slice());
        assert!(matches!(result, Err(Error::ContainerTruncated(_))));
    }

    #[test]
    fn test_reading_empty_container_fails() {
        let result = read_container(&mut [].as_slice());
        assert!(matches!(result, Err(Error::ContainerTruncated(_))));
    }
}
