use std::fmt::Display;

/// Precondition failures of the coding core, surfaced at the point of
/// violation. No retry or partial result is ever produced.
#[derive(Debug, PartialEq, Eq)]
pub enum CodingError {
    EmptyInput,
    UnknownSymbol(String),
    MalformedBitInput(char, usize),
    TruncatedBitInput,
}

impl Display for CodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Input sequence is empty, no coding tree can be built")
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {} is not present in the code table", symbol)
            }
            Self::MalformedBitInput(character, position) => {
                write!(
                    f,
                    "Character '{}' at position {} is not a binary digit",
                    character, position
                )
            }
            Self::TruncatedBitInput => {
                write!(f, "Bit input ended in the middle of a codeword")
            }
        }
    }
}

impl std::error::Error for CodingError {}
