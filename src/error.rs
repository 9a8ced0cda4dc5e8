use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadInputFile(std::io::Error),
    FailedToWriteOutputFile(std::io::Error),
    ContainerTruncated(std::io::Error),
    ContainerPayloadSizeMismatch,
    Coding(CodingError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(error) => {
                write!(f, "Failed to read input file: {}", error)
            }
            Self::FailedToWriteOutputFile(error) => {
                write!(f, "Failed to write output file: {}", error)
            }
            Self::ContainerTruncated(error) => {
                write!(f, "Compressed container ended unexpectedly: {}", error)
            }
            Self::ContainerPayloadSizeMismatch => {
                write!(
                    f,
                    "Size of the compressed payload does not match the recorded bit length"
                )
            }
            Self::Coding(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for Error {}

impl From<CodingError> for Error {
    fn from(error: CodingError) -> Self {
        Self::Coding(error)
    }
}
