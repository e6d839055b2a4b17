use std::collections::HashSet;
use std::sync::LazyLock;

use crate::constants::STOP_WORDS;
use crate::types::{Token, TokenRef};

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Tokens this short carry no signal (articles, initials, stray digits).
const MIN_TOKEN_CHARS: usize = 3;

#[derive(Copy, Clone)]
pub struct Tokenizer {
    filter_stop_words: bool,
}

impl Tokenizer {
    /// Configuration for similarity vectors: stop words are filtered out.
    pub fn similarity_parser() -> Self {
        Self {
            filter_stop_words: true,
        }
    }

    /// Configuration for raw frequency and phrase extraction: stop words
    /// are kept, since term repetition and literal wording both matter.
    pub fn frequency_parser() -> Self {
        Self {
            filter_stop_words: false,
        }
    }

    /// Tokenizer function to split the text into individual tokens.
    ///
    /// Lowercases the input, maps every non-word character to a space,
    /// splits on whitespace, and keeps tokens longer than two characters.
    /// Order and duplicates are preserved.
    pub fn tokenize(self, text: &TokenRef) -> Vec<Token> {
        text.to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' {
                    c
                } else {
                    ' '
                }
            })
            .collect::<String>()
            .split_whitespace()
            .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|word| !self.filter_stop_words || !STOP_WORD_SET.contains(word))
            .map(|word| word.to_string())
            .collect()
    }
}

/// Filter stop words out of an already tokenized sequence.
/// Order preserved; duplicates preserved (term frequency depends on repetition).
pub fn remove_stop_words(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| !STOP_WORD_SET.contains(token.as_str()))
        .collect()
}
