use std::collections::HashMap;

use super::{CodingError, Symbol, SymbolFrequency};

/// Count how often each distinct symbol occurs in `sequence`.
///
/// The result is sorted by symbol so that the tree builder sees the
/// alphabet in a reproducible order regardless of hash map iteration.
pub fn count_symbols<S: Symbol>(
    sequence: &[S],
) -> Result<Vec<SymbolFrequency<S>>, CodingError> {
    if sequence.is_empty() {
        return Err(CodingError::EmptyInput);
    }
    let mut counts: HashMap<S, usize> = HashMap::new();
    for &symbol in sequence {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    let mut frequencies: Vec<SymbolFrequency<S>> =
        counts.into_iter().map(SymbolFrequency::from).collect();
    frequencies.sort_by_key(|frequency| frequency.symbol);
    Ok(frequencies)
}
