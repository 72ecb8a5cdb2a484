use rust_stemmers::{Algorithm, Stemmer};

use crate::{Document, TokenFilter};

/// Reduces English tokens to their Snowball stems.
///
/// Stemming is case-sensitive in practice: place a [`LowercaseFilter`](super::LowercaseFilter)
/// before this filter.
pub struct StemFilter {
    stemmer: Stemmer,
}

impl StemFilter {
    /// Creates a new StemFilter for English.
    ///
    /// # Returns
    ///
    /// A new StemFilter.
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StemFilter {
    fn filter(&self, tokens: Document) -> Document {
        tokens
            .into_iter()
            .map(|token| self.stemmer.stem(&token).into_owned())
            .collect()
    }
}
