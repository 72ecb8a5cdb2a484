use std::io::{stdin, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use clap::Parser;
use sentibayes::{
    check_dataset, predict_bigram_interpolated, predict_unigram, BigramParams, UnigramParams,
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
    name = "predict",
    about = "A program to label movie reviews. Reads one review per line from stdin and writes 1 (positive) or 0 (negative) per line."
)]
struct Args {
    /// A labeled training corpus containing pos/ and neg/ directories
    #[arg(long, required = true)]
    train: Vec<PathBuf>,

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

    eprintln!("Reading reviews from stdin...");
    let eval_docs = corpus::read_lines(stdin().lock(), &preprocessor)?;
    eprintln!("# of reviews: {}", eval_docs.len());

    eprintln!("Start prediction");
    let start = Instant::now();
    let labels = match args.model {
        ModelKind::Unigram => {
            let params = UnigramParams {
                smoothing: args.smoothing,
                pos_prior: args.pos_prior,
            };
            params.validate()?;
            predict_unigram(&train.docs, &train.labels, &eval_docs, &params)
        }
        ModelKind::Bigram => {
            let params = BigramParams {
                unigram_smoothing: args.unigram_smoothing,
                bigram_smoothing: args.bigram_smoothing,
                bigram_lambda: args.bigram_lambda,
                pos_prior: args.pos_prior,
            };
            params.validate()?;
            predict_bigram_interpolated(&train.docs, &train.labels, &eval_docs, &params)
        }
    };
    let duration = start.elapsed();

    let mut out = BufWriter::new(stdout().lock());
    for label in labels {
        writeln!(out, "{}", u8::from(label))?;
    }
    out.flush()?;

    eprintln!("Elapsed: {} [sec]", duration.as_secs_f64());

    Ok(())
}
