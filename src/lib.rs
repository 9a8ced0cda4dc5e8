use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use container::{read_container, write_container};
pub use error::Error;
use huffman::{count_symbols, HuffmanCoder};

pub mod binary_stream;
mod cli;
mod container;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    mode: OperationMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationMode {
    Compress,
    Expand,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_string_lossy().into_owned(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.to_string_lossy().into_owned(), e)
        })
}

fn read_input_bytes(file: &File) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(Error::FailedToReadInputFile)?;
    Ok(bytes)
}

pub fn compress_file(arguments: &Arguments) -> Result<()> {
    let input_file = open_input_file(&arguments.input_file)?;
    let output_file = open_output_file(&arguments.output_file)?;
    let input = read_input_bytes(&input_file)?;
    let frequencies = count_symbols(&input)?;
    let coder = HuffmanCoder::from_frequencies(&frequencies)?;
    logger::log_code_table(coder.table());
    let bits = coder.encode_sequence(&input)?;
    log::info!(
        "compressed {} symbols ({} distinct) into {} bits",
        input.len(),
        frequencies.len(),
        bits.len()
    );
    let mut output_file_writer = BufWriter::new(&output_file);
    write_container(&mut output_file_writer, &frequencies, &bits)?;
    output_file_writer
        .flush()
        .map_err(Error::FailedToWriteOutputFile)?;
    Ok(())
}

pub fn expand_file(arguments: &Arguments) -> Result<()> {
    let input_file = open_input_file(&arguments.input_file)?;
    let output_file = open_output_file(&arguments.output_file)?;
    let mut input_file_reader = BufReader::new(&input_file);
    let (frequencies, bits) = read_container(&mut input_file_reader)?;
    let coder = HuffmanCoder::from_frequencies(&frequencies)?;
    let decoded = coder.decode_sequence(&bits)?;
    log::info!(
        "expanded {} bits back into {} symbols",
        bits.len(),
        decoded.len()
    );
    let mut output_file_writer = BufWriter::new(&output_file);
    output_file_writer
        .write_all(&decoded)
        .map_err(Error::FailedToWriteOutputFile)?;
    output_file_writer
        .flush()
        .map_err(Error::FailedToWriteOutputFile)?;
    Ok(())
}

pub fn run(arguments: &Arguments) -> Result<()> {
    match arguments.mode {
        OperationMode::Compress => compress_file(arguments),
        OperationMode::Expand => expand_file(arguments),
    }
}
