//! Rule base text processing for Sentibayes.
//!
//! Turns raw review text into token sequences and loads review corpora from disk.

pub mod corpus;
pub mod errors;
pub mod token_filters;

use unicode_segmentation::UnicodeSegmentation;

/// A tokenized review.
pub type Document = Vec<String>;

/// Filter that rewrites a token sequence.
pub trait TokenFilter {
    /// Filters the specified tokens.
    ///
    /// # Arguments:
    ///
    /// * `tokens` - Input tokens.
    ///
    /// # Returns
    ///
    /// Processed tokens.
    fn filter(&self, tokens: Document) -> Document;
}

/// Splits text into words on Unicode word boundaries.
///
/// Punctuation and whitespace are dropped. Apostrophes inside a word are kept, so `don't` stays
/// one token. Markup such as `<br />` leaves the bare word `br` behind.
///
/// # Arguments:
///
/// * `text` - Input text.
///
/// # Returns
///
/// Tokens in order of appearance.
pub fn tokenize(text: &str) -> Document {
    text.unicode_words().map(str::to_string).collect()
}

/// Tokenizer followed by a chain of token filters.
#[derive(Default)]
pub struct Preprocessor {
    filters: Vec<Box<dyn TokenFilter>>,
}

impl Preprocessor {
    /// Creates a preprocessor that only tokenizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter. Filters run in the order they are added.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: TokenFilter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Tokenizes the text and applies every filter.
    pub fn process(&self, text: &str) -> Document {
        self.filters
            .iter()
            .fold(tokenize(text), |tokens, filter| filter.filter(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::token_filters::{LowercaseFilter, StemFilter};

    #[test]
    fn test_tokenize() {
        assert_eq!(
            vec!["This", "movie", "was", "GREAT", "I", "don't", "regret", "it"],
            tokenize("This movie was GREAT!!! I don't regret it.")
        );
    }

    #[test]
    fn test_tokenize_markup() {
        assert_eq!(
            vec!["Awful", "br", "br", "Truly"],
            tokenize("Awful.<br /><br />Truly...")
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ... !!").is_empty());
    }

    #[test]
    fn test_preprocessor_without_filters() {
        let p = Preprocessor::new();
        assert_eq!(vec!["Good", "Film"], p.process("Good Film"));
    }

    #[test]
    fn test_preprocessor_filter_order() {
        let p = Preprocessor::new()
            .filter(LowercaseFilter::new())
            .filter(StemFilter::new());
        assert_eq!(vec!["love", "the", "act"], p.process("Loved the ACTING"));
    }
}
