use crate::classifier::{Label, NaiveBayes, Posterior};
use crate::errors::Result;
use crate::unigram::{unigram_posteriors, UnigramModel, UnigramParams};
use crate::utils;
use crate::vocabulary::Vocabulary;

// Id of tokens that never appeared in training. A pair containing it is unseen in both classes.
const UNKNOWN_ID: u32 = u32::MAX;

/// Hyperparameters of [`BigramInterpolatedModel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BigramParams {
    /// Additive smoothing constant of the unigram part.
    pub unigram_smoothing: f64,

    /// Additive smoothing constant of the bigram part. Pair features are far sparser than single
    /// tokens, so this is usually much smaller than `unigram_smoothing`.
    pub bigram_smoothing: f64,

    /// Weight of the bigram scores in `[0, 1]`. 0 is pure unigram and 1 is pure bigram.
    pub bigram_lambda: f64,

    /// Prior probability of the positive class, shared by both parts.
    pub pos_prior: f64,
}

impl Default for BigramParams {
    fn default() -> Self {
        Self {
            unigram_smoothing: 0.7,
            bigram_smoothing: 1e-10,
            bigram_lambda: 0.01,
            pos_prior: 0.8,
        }
    }
}

impl BigramParams {
    /// Checks the hyperparameters.
    ///
    /// # Errors
    ///
    /// [`SentibayesError::InvalidArgument`](crate::SentibayesError::InvalidArgument) will be
    /// returned if a smoothing constant is not positive, `bigram_lambda` is not in `[0, 1]`, or
    /// `pos_prior` is not in `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        utils::check_smoothing("unigram_smoothing", self.unigram_smoothing)?;
        utils::check_smoothing("bigram_smoothing", self.bigram_smoothing)?;
        utils::check_lambda("bigram_lambda", self.bigram_lambda)?;
        utils::check_prior("pos_prior", self.pos_prior)?;
        Ok(())
    }

    /// Parameters of the unigram part.
    pub const fn unigram(&self) -> UnigramParams {
        UnigramParams {
            smoothing: self.unigram_smoothing,
            pos_prior: self.pos_prior,
        }
    }
}

/// Iterates over the overlapping adjacent token pairs of a document.
///
/// A document of length `L` yields `L - 1` pairs, and none if it has fewer than two tokens. Stop
/// words are kept.
pub fn extract_bigrams<S>(doc: &[S]) -> impl Iterator<Item = (&str, &str)>
where
    S: AsRef<str>,
{
    doc.windows(2)
        .map(|pair| (pair[0].as_ref(), pair[1].as_ref()))
}

/// Naive Bayes model over adjacent token pairs.
#[derive(Clone, Debug)]
pub struct BigramModel {
    nb: NaiveBayes<(u32, u32)>,
    vocab: Vocabulary,
}

impl BigramModel {
    /// Counts every adjacent token pair into the table of its document's class.
    ///
    /// # Arguments
    ///
    /// * `train_docs` - Training documents.
    /// * `train_labels` - One label per training document.
    /// * `smoothing` - The additive smoothing constant.
    /// * `pos_prior` - The prior probability of the positive class.
    pub fn train<D, S>(
        train_docs: &[D],
        train_labels: &[Label],
        smoothing: f64,
        pos_prior: f64,
    ) -> Self
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut vocab = Vocabulary::new();
        let mut examples = Vec::with_capacity(train_docs.len());
        for (doc, &label) in train_docs.iter().zip(train_labels) {
            let pairs: Vec<_> = extract_bigrams(doc.as_ref())
                .map(|(w1, w2)| (vocab.get_or_insert_id(w1), vocab.get_or_insert_id(w2)))
                .collect();
            examples.push((label, pairs));
        }
        Self {
            nb: NaiveBayes::fit(examples, smoothing, pos_prior),
            vocab,
        }
    }

    fn token_id(&self, token: &str) -> u32 {
        self.vocab.get_id(token).unwrap_or(UNKNOWN_ID)
    }

    /// Computes the raw log-posterior of each class.
    pub fn score<S>(&self, doc: &[S]) -> Posterior
    where
        S: AsRef<str>,
    {
        let pairs: Vec<_> = extract_bigrams(doc)
            .map(|(w1, w2)| (self.token_id(w1), self.token_id(w2)))
            .collect();
        self.nb.score(&pairs)
    }

    /// Number of distinct tokens seen in training.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }
}

/// Linear interpolation of a [`UnigramModel`] and a [`BigramModel`].
///
/// The final score of each class is `(1 - lambda) * unigram + lambda * bigram`.
///
/// # Examples
///
/// ```
/// use sentibayes::{BigramInterpolatedModel, BigramParams, Label};
///
/// let train = [vec!["not", "bad", "at", "all"], vec!["bad", "acting"]];
/// let labels = [Label::Positive, Label::Negative];
/// let params = BigramParams {
///     bigram_lambda: 1.0,
///     pos_prior: 0.5,
///     ..BigramParams::default()
/// };
/// let model = BigramInterpolatedModel::train(&train, &labels, &params);
///
/// assert_eq!(Label::Positive, model.predict(&["not", "bad"]));
/// ```
#[derive(Clone, Debug)]
pub struct BigramInterpolatedModel {
    unigram: UnigramModel,
    bigram: BigramModel,
    lambda: f64,
}

impl BigramInterpolatedModel {
    /// Trains both parts on the same corpus.
    ///
    /// # Arguments
    ///
    /// * `train_docs` - Training documents.
    /// * `train_labels` - One label per training document.
    /// * `params` - Hyperparameters.
    ///
    /// # Returns
    ///
    /// A trained model.
    pub fn train<D, S>(train_docs: &[D], train_labels: &[Label], params: &BigramParams) -> Self
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        Self {
            unigram: UnigramModel::train(train_docs, train_labels, &params.unigram()),
            bigram: BigramModel::train(
                train_docs,
                train_labels,
                params.bigram_smoothing,
                params.pos_prior,
            ),
            lambda: params.bigram_lambda,
        }
    }

    /// Computes the interpolated log-posterior of each class.
    pub fn score<S>(&self, doc: &[S]) -> Posterior
    where
        S: AsRef<str>,
    {
        let unigram = self.unigram.score(doc);
        let bigram = self.bigram.score(doc);
        unigram.interpolate(&bigram, self.lambda)
    }

    /// Predicts the label of a document.
    pub fn predict<S>(&self, doc: &[S]) -> Label
    where
        S: AsRef<str>,
    {
        self.score(doc).label()
    }

    pub const fn unigram(&self) -> &UnigramModel {
        &self.unigram
    }

    pub const fn bigram(&self) -> &BigramModel {
        &self.bigram
    }
}

/// Predicts the labels of `eval_docs` by interpolating unigram and bigram scores.
///
/// # Arguments
///
/// * `train_docs` - Training documents.
/// * `train_labels` - One label per training document.
/// * `eval_docs` - Documents to label.
/// * `params` - Hyperparameters.
///
/// # Returns
///
/// One label per evaluation document, in input order.
pub fn predict_bigram_interpolated<D, E, S, T>(
    train_docs: &[D],
    train_labels: &[Label],
    eval_docs: &[E],
    params: &BigramParams,
) -> Vec<Label>
where
    D: AsRef<[S]>,
    E: AsRef<[T]>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let (unigram_pos, unigram_neg) = unigram_posteriors(
        train_docs,
        train_labels,
        eval_docs,
        params.unigram_smoothing,
        params.pos_prior,
    );
    let bigram = BigramModel::train(
        train_docs,
        train_labels,
        params.bigram_smoothing,
        params.pos_prior,
    );
    eval_docs
        .iter()
        .zip(unigram_pos.into_iter().zip(unigram_neg))
        .map(|(doc, (positive, negative))| {
            let unigram = Posterior { positive, negative };
            let bigram = bigram.score(doc.as_ref());
            unigram.interpolate(&bigram, params.bigram_lambda).label()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::unigram::predict_unigram;

    use Label::*;

    // Unigram evidence favors negative ("bad" is frequent there), while the pair ("not", "bad")
    // only occurs in positive reviews. "not" is a stop word, so only the bigram part sees it.
    fn disagreeing_corpus() -> ([Vec<&'static str>; 2], [Label; 2]) {
        (
            [
                vec!["not", "bad", "acting", "great"],
                vec!["bad", "bad", "movie"],
            ],
            [Positive, Negative],
        )
    }

    fn params(lambda: f64) -> BigramParams {
        BigramParams {
            bigram_lambda: lambda,
            pos_prior: 0.5,
            ..BigramParams::default()
        }
    }

    #[test]
    fn test_default_params() {
        let params = BigramParams::default();
        assert_eq!(0.7, params.unigram_smoothing);
        assert_eq!(1e-10, params.bigram_smoothing);
        assert_eq!(0.01, params.bigram_lambda);
        assert_eq!(0.8, params.pos_prior);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            "InvalidArgumentError: bigram_lambda: must be in [0, 1], but got 1.5",
            &params(1.5).validate().unwrap_err().to_string()
        );
        let p = BigramParams {
            bigram_smoothing: -1.0,
            ..BigramParams::default()
        };
        assert_eq!(
            "InvalidArgumentError: bigram_smoothing: must be a positive finite number, but got -1",
            &p.validate().unwrap_err().to_string()
        );
    }

    #[test]
    fn test_extract_bigrams_count() {
        let empty: [&str; 0] = [];
        assert_eq!(0, extract_bigrams(&empty).count());
        assert_eq!(0, extract_bigrams(&["one"]).count());
        assert_eq!(1, extract_bigrams(&["one", "two"]).count());
        assert_eq!(4, extract_bigrams(&["a", "b", "c", "d", "e"]).count());
    }

    #[test]
    fn test_extract_bigrams_keeps_order_and_stopwords() {
        let pairs: Vec<_> = extract_bigrams(&["this", "is", "fine"]).collect();
        assert_eq!(vec![("this", "is"), ("is", "fine")], pairs);
    }

    #[test]
    fn test_bigram_model_unknown_tokens() {
        let (train, labels) = disagreeing_corpus();
        let model = BigramModel::train(&train, &labels, 1.0, 0.5);
        assert_eq!(5, model.vocab_size());

        // Pairs built from unknown tokens are unseen in both classes.
        let p = model.score(&["never", "seen"]);
        let unseen_pos = model.nb.positive().unseen_log_likelihood() + 0.5f64.ln();
        let unseen_neg = model.nb.negative().unseen_log_likelihood() + 0.5f64.ln();
        assert_eq!(unseen_pos, p.positive);
        assert_eq!(unseen_neg, p.negative);

        // A single token has no pairs, so only the prior remains.
        let p = model.score(&["bad"]);
        assert_eq!(p.positive, p.negative);
    }

    #[test]
    fn test_lambda_zero_matches_unigram() {
        let (train, labels) = disagreeing_corpus();
        let eval = [
            vec!["not", "bad"],
            vec!["bad", "movie"],
            vec!["great", "acting"],
            vec![],
            vec!["unknown"],
        ];
        let p = params(0.0);

        let expected = predict_unigram(&train, &labels, &eval, &p.unigram());
        assert_eq!(expected, predict_bigram_interpolated(&train, &labels, &eval, &p));
        assert_eq!(Negative, expected[0]);
    }

    #[test]
    fn test_lambda_one_matches_bigram() {
        let (train, labels) = disagreeing_corpus();
        let eval = [
            vec!["not", "bad"],
            vec!["bad", "movie"],
            vec!["acting", "great"],
            vec!["great"],
        ];
        let p = params(1.0);
        let bigram = BigramModel::train(&train, &labels, p.bigram_smoothing, p.pos_prior);

        let expected: Vec<_> = eval.iter().map(|doc| bigram.score(doc).label()).collect();
        assert_eq!(expected, predict_bigram_interpolated(&train, &labels, &eval, &p));
        assert_eq!(Positive, expected[0]);
    }

    #[test]
    fn test_default_lambda_leans_on_unigram() {
        let (train, labels) = disagreeing_corpus();
        let eval = [vec!["not", "bad"]];

        assert_eq!(
            vec![Negative],
            predict_bigram_interpolated(&train, &labels, &eval, &params(0.01))
        );
    }

    #[test]
    fn test_model_matches_batch_prediction() {
        let (train, labels) = disagreeing_corpus();
        let eval = [
            vec!["not", "bad"],
            vec!["bad", "movie", "great"],
            vec!["acting"],
        ];
        for lambda in [0.0, 0.01, 0.5, 1.0] {
            let p = params(lambda);
            let model = BigramInterpolatedModel::train(&train, &labels, &p);
            let expected: Vec<_> = eval.iter().map(|doc| model.predict(doc)).collect();
            assert_eq!(expected, predict_bigram_interpolated(&train, &labels, &eval, &p));
        }
    }

    #[test]
    fn test_empty_eval_and_tie() {
        let (train, labels) = disagreeing_corpus();
        let empty: [Vec<&str>; 0] = [];
        assert!(predict_bigram_interpolated(&train, &labels, &empty, &params(0.5)).is_empty());

        let eval: [Vec<&str>; 1] = [vec![]];
        assert_eq!(
            vec![Negative],
            predict_bigram_interpolated(&train, &labels, &eval, &params(0.5))
        );
    }

    #[test]
    fn test_deterministic() {
        let (train, labels) = disagreeing_corpus();
        let eval = [vec!["not", "bad", "movie"], vec!["bad", "acting", "great"]];
        let p = BigramParams::default();

        let first = predict_bigram_interpolated(&train, &labels, &eval, &p);
        let second = predict_bigram_interpolated(&train, &labels, &eval, &p);
        assert_eq!(eval.len(), first.len());
        assert_eq!(first, second);
    }
}
