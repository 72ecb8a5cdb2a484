//! # Sentibayes
//!
//! Sentibayes is a Naive Bayes sentiment classifier for movie reviews. It provides a unigram
//! model with a fixed stop-word list, and a model that linearly interpolates the unigram scores
//! with scores over adjacent word pairs.
//!
//! ## Examples
//!
//! ```
//! use sentibayes::{predict_bigram_interpolated, predict_unigram, BigramParams, Label, UnigramParams};
//!
//! let train = [
//!     vec!["a", "moving", "and", "funny", "film"],
//!     vec!["a", "dull", "and", "lifeless", "film"],
//! ];
//! let labels = [Label::Positive, Label::Negative];
//! let eval = [vec!["funny", "and", "moving"], vec!["lifeless"]];
//!
//! let params = UnigramParams {
//!     pos_prior: 0.5,
//!     ..UnigramParams::default()
//! };
//! params.validate().unwrap();
//! let labels_uni = predict_unigram(&train, &labels, &eval, &params);
//! assert_eq!(vec![Label::Positive, Label::Negative], labels_uni);
//!
//! let params = BigramParams {
//!     pos_prior: 0.5,
//!     ..BigramParams::default()
//! };
//! let labels_bi = predict_bigram_interpolated(&train, &labels, &eval, &params);
//! assert_eq!(eval.len(), labels_bi.len());
//! ```
//!
//! Both prediction functions are pure: they rebuild every table from the training corpus on each
//! call and never fail. Use [`check_dataset`] and the `validate` methods of the parameter structs
//! to reject malformed input beforehand.

mod utils;

mod bigram;
mod classifier;
mod frequency;
mod stopwords;
mod unigram;
mod vocabulary;

pub mod errors;

pub use bigram::{
    extract_bigrams, predict_bigram_interpolated, BigramInterpolatedModel, BigramModel,
    BigramParams,
};
pub use classifier::{check_dataset, Label, NaiveBayes, Posterior};
pub use errors::SentibayesError;
pub use frequency::{FrequencyTable, LikelihoodTable};
pub use stopwords::{StopwordFilter, STOPWORDS};
pub use unigram::{predict_unigram, UnigramModel, UnigramParams};
pub use vocabulary::Vocabulary;
