use std::borrow::Borrow;
use std::hash::Hash;

use hashbrown::HashMap;

/// Occurrence counts of features observed in one class.
#[derive(Clone, Debug)]
pub struct FrequencyTable<F> {
    counts: HashMap<F, u32>,
    total: u64,
}

impl<F> FrequencyTable<F>
where
    F: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    pub fn add(&mut self, feature: F) {
        *self.counts.entry(feature).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count<Q: ?Sized>(&self, feature: &Q) -> u32
    where
        F: Borrow<Q>,
        Q: Eq + Hash,
    {
        self.counts.get(feature).copied().unwrap_or(0)
    }

    /// Total number of feature occurrences (`n`).
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct features (`V`).
    pub fn vocab_size(&self) -> usize {
        self.counts.len()
    }
}

impl<F> Default for FrequencyTable<F>
where
    F: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Smoothed log-likelihoods derived from a [`FrequencyTable`].
///
/// `log((count + alpha) / (n + alpha * (V + 1)))`, where the extra slot in the denominator is the
/// probability mass reserved for features never seen in this class.
#[derive(Clone, Debug)]
pub struct LikelihoodTable<F> {
    log_probs: HashMap<F, f64>,
    alpha: f64,
    total: u64,
    vocab_size: usize,
}

impl<F> LikelihoodTable<F>
where
    F: Eq + Hash,
{
    pub fn new(freqs: FrequencyTable<F>, alpha: f64) -> Self {
        let total = freqs.total();
        let vocab_size = freqs.vocab_size();
        let denom = Self::denominator(alpha, total, vocab_size);
        let log_probs = freqs
            .counts
            .into_iter()
            .map(|(feature, count)| (feature, ((f64::from(count) + alpha) / denom).ln()))
            .collect();
        Self {
            log_probs,
            alpha,
            total,
            vocab_size,
        }
    }

    #[inline(always)]
    fn denominator(alpha: f64, total: u64, vocab_size: usize) -> f64 {
        total as f64 + alpha * (vocab_size as f64 + 1.0)
    }

    /// Log-likelihood of a feature absent from this class.
    #[inline(always)]
    pub fn unseen_log_likelihood(&self) -> f64 {
        (self.alpha / Self::denominator(self.alpha, self.total, self.vocab_size)).ln()
    }

    pub fn log_likelihood<Q: ?Sized>(&self, feature: &Q) -> f64
    where
        F: Borrow<Q>,
        Q: Eq + Hash,
    {
        self.log_probs
            .get(feature)
            .copied()
            .unwrap_or_else(|| self.unseen_log_likelihood())
    }

    pub fn len(&self) -> usize {
        self.log_probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log_probs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_frequency_table_counts() {
        let mut freqs = FrequencyTable::new();
        freqs.add("good".to_string());
        freqs.add("good".to_string());
        freqs.add("fun".to_string());

        assert_eq!(2, freqs.count("good"));
        assert_eq!(1, freqs.count("fun"));
        assert_eq!(0, freqs.count("bad"));
        assert_eq!(3, freqs.total());
        assert_eq!(2, freqs.vocab_size());
    }

    #[test]
    fn test_likelihood_seen_and_unseen() {
        let mut freqs = FrequencyTable::new();
        freqs.add("good".to_string());
        freqs.add("good".to_string());
        freqs.add("fun".to_string());
        let table = LikelihoodTable::new(freqs, 0.5);

        // n = 3, V = 2, denominator = 3 + 0.5 * 3 = 4.5
        assert_close((2.5f64 / 4.5).ln(), table.log_likelihood("good"));
        assert_close((1.5f64 / 4.5).ln(), table.log_likelihood("fun"));
        assert_close((0.5f64 / 4.5).ln(), table.log_likelihood("bad"));
        assert_close((0.5f64 / 4.5).ln(), table.unseen_log_likelihood());
        assert_eq!(2, table.len());
    }

    #[test]
    fn test_likelihood_empty_class() {
        let table = LikelihoodTable::new(FrequencyTable::<String>::new(), 0.8);

        assert!(table.is_empty());
        // n = 0, V = 0: alpha / alpha
        assert_close(0.0, table.unseen_log_likelihood());
        assert!(table.log_likelihood("anything").is_finite());
    }

    #[test]
    fn test_likelihood_pair_features() {
        let mut freqs = FrequencyTable::new();
        freqs.add((0u32, 1u32));
        let table = LikelihoodTable::new(freqs, 1.0);

        // n = 1, V = 1, denominator = 1 + 2 = 3
        assert_close((2.0f64 / 3.0).ln(), table.log_likelihood(&(0u32, 1u32)));
        assert_close((1.0f64 / 3.0).ln(), table.log_likelihood(&(1u32, 0u32)));
    }
}
