use crate::classifier::{Label, NaiveBayes, Posterior};
use crate::errors::Result;
use crate::stopwords::StopwordFilter;
use crate::utils;

/// Hyperparameters of [`UnigramModel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnigramParams {
    /// Additive smoothing constant.
    pub smoothing: f64,

    /// Prior probability of the positive class. The negative prior is `1 - pos_prior`.
    pub pos_prior: f64,
}

impl Default for UnigramParams {
    fn default() -> Self {
        Self {
            smoothing: 0.8,
            pos_prior: 0.8,
        }
    }
}

impl UnigramParams {
    /// Checks the hyperparameters.
    ///
    /// Scoring never fails on its own: a zero smoothing constant or a prior of 0 or 1 simply
    /// produces infinite scores. Call this before training to reject such inputs.
    ///
    /// # Errors
    ///
    /// [`SentibayesError::InvalidArgument`](crate::SentibayesError::InvalidArgument) will be
    /// returned if `smoothing` is not positive or `pos_prior` is not in `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        utils::check_smoothing("smoothing", self.smoothing)?;
        utils::check_prior("pos_prior", self.pos_prior)?;
        Ok(())
    }
}

/// Naive Bayes model over single tokens. Stop words are skipped both in training and in scoring.
///
/// # Examples
///
/// ```
/// use sentibayes::{Label, UnigramModel, UnigramParams};
///
/// let train = [vec!["great", "film"], vec!["awful", "film"]];
/// let labels = [Label::Positive, Label::Negative];
/// let params = UnigramParams {
///     pos_prior: 0.5,
///     ..UnigramParams::default()
/// };
/// let model = UnigramModel::train(&train, &labels, &params);
///
/// assert_eq!(Label::Positive, model.predict(&["great"]));
/// assert_eq!(Label::Negative, model.predict(&["awful"]));
/// ```
#[derive(Clone, Debug)]
pub struct UnigramModel {
    nb: NaiveBayes<String>,
    stopwords: StopwordFilter,
}

impl UnigramModel {
    /// Counts every non-stop-word token into the table of its document's class.
    ///
    /// # Arguments
    ///
    /// * `train_docs` - Training documents.
    /// * `train_labels` - One label per training document. Extra documents or labels are
    ///   ignored; use [`check_dataset`](crate::check_dataset) to reject such input.
    /// * `params` - Hyperparameters.
    ///
    /// # Returns
    ///
    /// A trained model.
    pub fn train<D, S>(train_docs: &[D], train_labels: &[Label], params: &UnigramParams) -> Self
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        let stopwords = StopwordFilter::new();
        let examples = train_docs.iter().zip(train_labels).map(|(doc, &label)| {
            let features = stopwords.retain(doc.as_ref()).map(str::to_string);
            (label, features)
        });
        Self {
            nb: NaiveBayes::fit(examples, params.smoothing, params.pos_prior),
            stopwords,
        }
    }

    /// Computes the raw log-posterior of each class.
    pub fn score<S>(&self, doc: &[S]) -> Posterior
    where
        S: AsRef<str>,
    {
        self.nb.score(self.stopwords.retain(doc))
    }

    /// Predicts the label of a document.
    pub fn predict<S>(&self, doc: &[S]) -> Label
    where
        S: AsRef<str>,
    {
        self.score(doc).label()
    }
}

/// Trains a unigram model and returns the raw positive and negative log-posteriors of every
/// evaluation document, in input order.
pub(crate) fn unigram_posteriors<D, E, S, T>(
    train_docs: &[D],
    train_labels: &[Label],
    eval_docs: &[E],
    smoothing: f64,
    pos_prior: f64,
) -> (Vec<f64>, Vec<f64>)
where
    D: AsRef<[S]>,
    E: AsRef<[T]>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let params = UnigramParams {
        smoothing,
        pos_prior,
    };
    let model = UnigramModel::train(train_docs, train_labels, &params);
    eval_docs
        .iter()
        .map(|doc| {
            let Posterior { positive, negative } = model.score(doc.as_ref());
            (positive, negative)
        })
        .unzip()
}

/// Predicts the labels of `eval_docs` with a unigram model trained on `train_docs`.
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
pub fn predict_unigram<D, E, S, T>(
    train_docs: &[D],
    train_labels: &[Label],
    eval_docs: &[E],
    params: &UnigramParams,
) -> Vec<Label>
where
    D: AsRef<[S]>,
    E: AsRef<[T]>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let (pos, neg) = unigram_posteriors(
        train_docs,
        train_labels,
        eval_docs,
        params.smoothing,
        params.pos_prior,
    );
    pos.into_iter()
        .zip(neg)
        .map(|(positive, negative)| Posterior { positive, negative }.label())
        .collect()
}
