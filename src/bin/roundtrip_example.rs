use huffman_codec::huffman::{CodingError, HuffmanCoder};

fn main() -> Result<(), CodingError> {
    let training_sequence = b"aabacabaaa".to_vec();

    let coder = HuffmanCoder::new(&training_sequence)?;
    println!("code table");
    for (&symbol, codeword) in coder.table().iter() {
        println!("{} -> {}", symbol as char, codeword);
    }

    let bits = coder.encode_sequence(&training_sequence)?;
    println!("sequence to encode\n{}", String::from_utf8_lossy(&training_sequence));
    println!("encoded sequence\n{}", bits);

    let decoded = coder.decode_sequence(&bits)?;
    println!("decoded sequence\n{}", String::from_utf8_lossy(&decoded));
    Ok(())
}
