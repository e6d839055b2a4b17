use resume_scorer::Tokenizer;

#[cfg(test)]
mod similarity_tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_input() {
        let tokenizer = Tokenizer::similarity_parser();

        let text = "Rust Engineer building Services";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["rust", "engineer", "building", "services"]);
    }

    #[test]
    fn test_tokenize_ignores_stop_words() {
        let tokenizer = Tokenizer::similarity_parser();

        let text = "they must have been working with the scoring engine";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["working", "scoring", "engine"]);
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        let tokenizer = Tokenizer::similarity_parser();

        let text = "a ab abc in C we go";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["abc"]);
    }

    #[test]
    fn test_tokenize_with_punctuation() {
        let tokenizer = Tokenizer::similarity_parser();

        let text = "React, TypeScript; Node.js (preferred) - required!";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(
            tokens,
            vec!["react", "typescript", "node", "preferred", "required"]
        );
    }

    #[test]
    fn test_tokenize_with_mixed_whitespace() {
        let tokenizer = Tokenizer::similarity_parser();

        let text = "backend\tservices\n\n  deployed   nightly";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["backend", "services", "deployed", "nightly"]);
    }

    #[test]
    fn test_tokenize_empty_string() {
        let tokenizer = Tokenizer::similarity_parser();

        let text = "";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, Vec::<String>::new());
    }

    #[test]
    fn test_no_token_shorter_than_three_chars() {
        let tokenizer = Tokenizer::similarity_parser();

        let text = "Go to an R&D lab; C++ and C# are in use";
        let tokens = tokenizer.tokenize(text);
        assert!(tokens.iter().all(|t| t.chars().count() > 2));
    }
}

#[cfg(test)]
mod frequency_tokenizer_tests {
    use super::*;

    #[test]
    fn test_frequency_tokenize_keeps_stop_words() {
        let tokenizer = Tokenizer::frequency_parser();

        let text = "they must have been working with the scoring engine";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(
            tokens,
            vec![
                "they", "must", "have", "been", "working", "with", "the", "scoring", "engine"
            ]
        );
    }

    #[test]
    fn test_frequency_tokenize_preserves_duplicates() {
        let tokenizer = Tokenizer::frequency_parser();

        let text = "rust rust rust tokio";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, vec!["rust", "rust", "rust", "tokio"]);
    }

    #[test]
    fn test_frequency_tokenize_empty_string() {
        let tokenizer = Tokenizer::frequency_parser();

        let text = "";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens, Vec::<String>::new());
    }
}
