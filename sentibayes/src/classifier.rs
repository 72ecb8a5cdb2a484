use std::borrow::Borrow;
use std::hash::Hash;

use crate::errors::{Result, SentibayesError};
use crate::frequency::{FrequencyTable, LikelihoodTable};

/// Sentiment label of a review.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Label {
    /// Negative review.
    Negative = 0,

    /// Positive review.
    Positive = 1,
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label as u8
    }
}

impl TryFrom<u8> for Label {
    type Error = SentibayesError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            _ => Err(SentibayesError::invalid_argument(
                "label",
                format!("must be 0 or 1, but got {value}"),
            )),
        }
    }
}

/// Raw log-posterior totals of a document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Posterior {
    pub positive: f64,
    pub negative: f64,
}

impl Posterior {
    /// Collapses the scores into a label.
    ///
    /// Ties resolve to [`Label::Negative`]: only a strictly greater positive score yields
    /// [`Label::Positive`].
    pub fn label(&self) -> Label {
        Label::from(self.positive > self.negative)
    }

    /// Blends two score pairs as `(1 - lambda) * self + lambda * other`.
    pub fn interpolate(&self, other: &Self, lambda: f64) -> Self {
        Self {
            positive: (1.0 - lambda) * self.positive + lambda * other.positive,
            negative: (1.0 - lambda) * self.negative + lambda * other.negative,
        }
    }
}

/// Two-class Naive Bayes scorer over features of type `F`.
#[derive(Clone, Debug)]
pub struct NaiveBayes<F> {
    positive: LikelihoodTable<F>,
    negative: LikelihoodTable<F>,
    log_pos_prior: f64,
    log_neg_prior: f64,
}

impl<F> NaiveBayes<F>
where
    F: Eq + Hash,
{
    /// Counts the features of every example into the table of its class and derives smoothed
    /// likelihoods.
    ///
    /// # Arguments
    ///
    /// * `examples` - Pairs of a label and the features of one training document.
    /// * `alpha` - The additive smoothing constant.
    /// * `pos_prior` - The prior probability of the positive class.
    pub fn fit<I, J>(examples: I, alpha: f64, pos_prior: f64) -> Self
    where
        I: IntoIterator<Item = (Label, J)>,
        J: IntoIterator<Item = F>,
    {
        let mut pos_freqs = FrequencyTable::new();
        let mut neg_freqs = FrequencyTable::new();
        for (label, features) in examples {
            let freqs = match label {
                Label::Positive => &mut pos_freqs,
                Label::Negative => &mut neg_freqs,
            };
            for feature in features {
                freqs.add(feature);
            }
        }
        Self::from_frequencies(pos_freqs, neg_freqs, alpha, pos_prior)
    }

    pub fn from_frequencies(
        pos_freqs: FrequencyTable<F>,
        neg_freqs: FrequencyTable<F>,
        alpha: f64,
        pos_prior: f64,
    ) -> Self {
        Self {
            positive: LikelihoodTable::new(pos_freqs, alpha),
            negative: LikelihoodTable::new(neg_freqs, alpha),
            log_pos_prior: pos_prior.ln(),
            log_neg_prior: (1.0 - pos_prior).ln(),
        }
    }

    /// Sums the log-likelihoods of the given features per class and adds the log-priors.
    pub fn score<'q, I, Q>(&self, features: I) -> Posterior
    where
        I: IntoIterator<Item = &'q Q>,
        Q: ?Sized + Eq + Hash + 'q,
        F: Borrow<Q>,
    {
        let mut positive = 0.0;
        let mut negative = 0.0;
        for feature in features {
            positive += self.positive.log_likelihood(feature);
            negative += self.negative.log_likelihood(feature);
        }
        Posterior {
            positive: positive + self.log_pos_prior,
            negative: negative + self.log_neg_prior,
        }
    }

    pub const fn positive(&self) -> &LikelihoodTable<F> {
        &self.positive
    }

    pub const fn negative(&self) -> &LikelihoodTable<F> {
        &self.negative
    }
}

/// Checks that every training document has exactly one label.
///
/// # Errors
///
/// [`SentibayesError::InvalidDataset`] will be returned if the lengths differ.
pub fn check_dataset<D>(docs: &[D], labels: &[Label]) -> Result<()> {
    if docs.len() != labels.len() {
        return Err(SentibayesError::invalid_dataset(format!(
            "{} documents but {} labels",
            docs.len(),
            labels.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_conversion() {
        assert_eq!(Label::Negative, Label::try_from(0u8).unwrap());
        assert_eq!(Label::Positive, Label::try_from(1u8).unwrap());
        assert_eq!(1u8, u8::from(Label::Positive));
        assert_eq!(
            "InvalidArgumentError: label: must be 0 or 1, but got 2",
            &Label::try_from(2u8).unwrap_err().to_string()
        );
    }

    #[test]
    fn test_posterior_tie_is_negative() {
        let p = Posterior {
            positive: -3.5,
            negative: -3.5,
        };
        assert_eq!(Label::Negative, p.label());

        let p = Posterior {
            positive: -3.4,
            negative: -3.5,
        };
        assert_eq!(Label::Positive, p.label());
    }

    #[test]
    fn test_posterior_interpolate_bounds() {
        let a = Posterior {
            positive: -1.0,
            negative: -2.0,
        };
        let b = Posterior {
            positive: -8.0,
            negative: -4.0,
        };
        assert_eq!(a, a.interpolate(&b, 0.0));
        assert_eq!(b, a.interpolate(&b, 1.0));
        assert_eq!(
            Posterior {
                positive: -4.5,
                negative: -3.0,
            },
            a.interpolate(&b, 0.5)
        );
    }

    #[test]
    fn test_naive_bayes_score() {
        let examples = vec![
            (Label::Positive, vec!["good", "good"]),
            (Label::Negative, vec!["bad"]),
        ];
        let nb = NaiveBayes::fit(examples, 1.0, 0.5);

        // positive: n = 2, V = 1, denominator = 4; negative: n = 1, V = 1, denominator = 3
        let p = nb.score(["good", "bad"].iter());
        let expected_pos = (3.0f64 / 4.0).ln() + (1.0f64 / 4.0).ln() + 0.5f64.ln();
        let expected_neg = (1.0f64 / 3.0).ln() + (2.0f64 / 3.0).ln() + 0.5f64.ln();
        assert!((expected_pos - p.positive).abs() < 1e-12);
        assert!((expected_neg - p.negative).abs() < 1e-12);
        assert_eq!(1, nb.positive().len());
        assert_eq!(1, nb.negative().len());
    }

    #[test]
    fn test_naive_bayes_empty_features_only_prior() {
        let nb = NaiveBayes::<&str>::fit(Vec::<(Label, Vec<&str>)>::new(), 0.8, 0.8);
        let p = nb.score(std::iter::empty::<&&str>());
        assert_eq!(0.8f64.ln(), p.positive);
        assert_eq!((1.0f64 - 0.8).ln(), p.negative);
    }

    #[test]
    fn test_check_dataset() {
        let docs = [vec!["a"], vec!["b"]];
        assert!(check_dataset(&docs, &[Label::Positive, Label::Negative]).is_ok());
        assert_eq!(
            "InvalidDatasetError: 2 documents but 1 labels",
            &check_dataset(&docs, &[Label::Positive])
                .unwrap_err()
                .to_string()
        );
    }
}
