use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use clap::Parser;
use sentibayes::{
    check_dataset, predict_bigram_interpolated, predict_unigram, BigramParams, Label,
    UnigramParams,
};
use sentibayes_rules::{
    corpus::{self, LabeledCorpus},
    token_filters::{LowercaseFilter, StemFilter},
    Preprocessor,
};

#[derive(Clone, Copy, Debug)]
enum ModelKind {
    Unigram,
    Bigram,
}

impl FromStr for ModelKind {
    type Err = &'static str;
    fn from_str(model: &str) -> Result<Self, Self::Err> {
        match model {
            "unigram" => Ok(Self::Unigram),
            "bigram" => Ok(Self::Bigram),
            _ => Err("Could not parse a model value"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "evaluate",
    about = "A program to evaluate the accuracy of the sentiment classifier."
)]
struct Args {
    /// A labeled training corpus containing pos/ and neg/ directories
    #[arg(long, required = true)]
    train: Vec<PathBuf>,

    /// A labeled development corpus containing pos/ and neg/ directories
    #[arg(long)]
    dev: PathBuf,

    /// The model: {unigram, bigram}.
    /// unigram: Naive Bayes over words.
    /// bigram: unigram scores interpolated with Naive Bayes over adjacent word pairs.
    #[arg(long, default_value = "bigram")]
    model: ModelKind,

    /// The smoothing parameter of the unigram model
    #[arg(long, default_value = "0.8")]
    smoothing: f64,

    /// The smoothing parameter of the unigram part of the bigram model
    #[arg(long, default_value = "0.7")]
    unigram_smoothing: f64,

    /// The smoothing parameter of the bigram part of the bigram model
    #[arg(long, default_value = "1e-10")]
    bigram_smoothing: f64,

    /// The weight of the bigram part in [0, 1]
    #[arg(long, default_value = "0.01")]
    bigram_lambda: f64,

    /// The prior probability of a positive review
    #[arg(long, default_value = "0.8")]
    pos_prior: f64,

    /// Do not lowercase tokens.
    #[arg(long)]
    no_lower: bool,

    /// Stem tokens with the Snowball English stemmer.
    #[arg(long)]
    stem: bool,
}

/// Confusion counts with [`Label::Positive`] as the positive class.
#[derive(Debug, Default, PartialEq)]
struct Confusion {
    n_tp: usize,
    n_tn: usize,
    n_fp: usize,
    n_fn: usize,
}

impl Confusion {
    fn new(references: &[Label], hypotheses: &[Label]) -> Self {
        let mut c = Self::default();
        for (&r, &h) in references.iter().zip(hypotheses) {
            match (r, h) {
                (Label::Positive, Label::Positive) => c.n_tp += 1,
                (Label::Negative, Label::Negative) => c.n_tn += 1,
                (Label::Negative, Label::Positive) => c.n_fp += 1,
                (Label::Positive, Label::Negative) => c.n_fn += 1,
            }
        }
        c
    }

    fn total(&self) -> usize {
        self.n_tp + self.n_tn + self.n_fp + self.n_fn
    }

    fn accuracy(&self) -> f64 {
        ratio(self.n_tp + self.n_tn, self.total())
    }

    fn precision(&self) -> f64 {
        ratio(self.n_tp, self.n_tp + self.n_fp)
    }

    fn recall(&self) -> f64 {
        ratio(self.n_tp, self.n_tp + self.n_fn)
    }

    fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        if precision + recall == 0.0 {
            0.0
        } else {
            2. * precision * recall / (precision + recall)
        }
    }
}

// 0 when the denominator is empty.
fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut preprocessor = Preprocessor::new();
    if !args.no_lower {
        preprocessor = preprocessor.filter(LowercaseFilter::new());
    }
    if args.stem {
        preprocessor = preprocessor.filter(StemFilter::new());
    }

    eprintln!("Loading dataset...");
    let mut train = LabeledCorpus::default();
    for path in &args.train {
        eprintln!("Loading {path:?} ...");
        let c = corpus::load_labeled_dir(path, &preprocessor)?;
        train.docs.extend(c.docs);
        train.labels.extend(c.labels);
        eprintln!(
            "# of documents: {} (positive: {})",
            train.len(),
            train.n_positive()
        );
    }
    check_dataset(&train.docs, &train.labels)?;

    eprintln!("Loading {:?} ...", args.dev);
    let dev = corpus::load_labeled_dir(&args.dev, &preprocessor)?;
    eprintln!(
        "# of documents: {} (positive: {})",
        dev.len(),
        dev.n_positive()
    );

    eprintln!("Start prediction");
    let start = Instant::now();
    let hypotheses = match args.model {
        ModelKind::Unigram => {
            let params = UnigramParams {
                smoothing: args.smoothing,
                pos_prior: args.pos_prior,
            };
            params.validate()?;
            predict_unigram(&train.docs, &train.labels, &dev.docs, &params)
        }
        ModelKind::Bigram => {
            let params = BigramParams {
                unigram_smoothing: args.unigram_smoothing,
                bigram_smoothing: args.bigram_smoothing,
                bigram_lambda: args.bigram_lambda,
                pos_prior: args.pos_prior,
            };
            params.validate()?;
            predict_bigram_interpolated(&train.docs, &train.labels, &dev.docs, &params)
        }
    };
    eprintln!("Elapsed: {} [sec]", start.elapsed().as_secs_f64());

    let c = Confusion::new(&dev.labels, &hypotheses);
    println!("Accuracy: {}", c.accuracy());
    println!("Precision: {}", c.precision());
    println!("Recall: {}", c.recall());
    println!("F1: {}", c.f1());
    println!(
        "TP: {}, TN: {}, FP: {}, FN: {}",
        c.n_tp, c.n_tn, c.n_fp, c.n_fn
    );

    Ok(())
}
