use std::collections::HashMap;

use crate::types::Token;

/// Build a max-normalized term-frequency vector from a token sequence.
///
/// Each count is divided by the highest single-token count in the sequence
/// (not by document length), so the most frequent term always maps to 1.0.
pub fn term_frequency(tokens: &[Token]) -> HashMap<Token, f64> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(0);
    if max_count == 0 {
        return HashMap::new();
    }

    counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count as f64 / max_count as f64))
        .collect()
}
