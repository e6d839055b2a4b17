use crate::models::Tokenizer;
use crate::types::Token;

/// Extract bigram and trigram phrases from a text.
///
/// Tokenization here keeps stop words so that literal phrasing survives;
/// phrase overlap is a check for shared wording, not shared vocabulary.
pub fn extract_phrases(text: &str) -> Vec<Token> {
    let words = Tokenizer::frequency_parser().tokenize(text);
    let mut phrases = Vec::new();

    for pair in words.windows(2) {
        phrases.push(pair.join(" "));
    }

    for triple in words.windows(3) {
        phrases.push(triple.join(" "));
    }

    phrases
}
