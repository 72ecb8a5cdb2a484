//! Fixed English stop-word list used by unigram feature extraction.

use std::sync::OnceLock;

use hashbrown::HashSet;

/// Function words excluded from unigram counting.
///
/// The trailing `br` is left over from `<br />` tags in scraped review text.
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't", "br",
];

fn stopword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

/// Stop-word filter.
///
/// Membership is case-sensitive: `"The"` is not a stop word, `"the"` is.
#[derive(Clone, Copy, Debug, Default)]
pub struct StopwordFilter;

impl StopwordFilter {
    /// Creates a new StopwordFilter.
    pub const fn new() -> Self {
        Self
    }

    /// Checks whether the given token is a stop word.
    ///
    /// # Arguments
    ///
    /// * `token` - A token.
    ///
    /// # Returns
    ///
    /// `true` if the token is in the stop-word list.
    #[inline(always)]
    pub fn is_stopword(&self, token: &str) -> bool {
        stopword_set().contains(token)
    }

    /// Iterates over the tokens of a document that are not stop words.
    pub fn retain<'a, S>(&self, doc: &'a [S]) -> impl Iterator<Item = &'a str> + 'a
    where
        S: AsRef<str>,
    {
        let filter = *self;
        doc.iter()
            .map(<S as AsRef<str>>::as_ref)
            .filter(move |token| !filter.is_stopword(token))
    }
}
