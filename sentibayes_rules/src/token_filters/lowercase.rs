use crate::{Document, TokenFilter};

/// Lowercases every token.
///
/// The stop-word list is lowercase and case-sensitive, so this filter is needed for capitalized
/// function words to be dropped.
#[derive(Clone, Copy, Debug)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Creates a new LowercaseFilter.
    ///
    /// # Returns
    ///
    /// A new LowercaseFilter.
    pub const fn new() -> Self {
        Self {}
    }
}

impl Default for LowercaseFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for LowercaseFilter {
    fn filter(&self, mut tokens: Document) -> Document {
        for token in &mut tokens {
            if token.chars().any(char::is_uppercase) {
                *token = token.to_lowercase();
            }
        }
        tokens
    }
}
