//! Loaders for review corpora.
//!
//! A labeled corpus is a directory with a `pos/` and a `neg/` subdirectory, each holding one
//! review per file. Files ending in `.zst` are decompressed transparently.

use std::fs::{self, File};
use std::io::{BufRead, Read};
use std::path::{Path, PathBuf};

use sentibayes::Label;

use crate::errors::{Result, RulesError};
use crate::{Document, Preprocessor};

/// Documents paired positionally with their labels.
#[derive(Debug, Default)]
pub struct LabeledCorpus {
    pub docs: Vec<Document>,
    pub labels: Vec<Label>,
}

impl LabeledCorpus {
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn n_positive(&self) -> usize {
        self.labels.iter().filter(|&&l| l == Label::Positive).count()
    }
}

fn read_text(path: &Path) -> Result<String> {
    let mut bytes = vec![];
    if path.extension().map_or(false, |ext| ext == "zst") {
        let mut decoder = zstd::Decoder::new(File::open(path)?)?;
        decoder.read_to_end(&mut bytes)?;
    } else {
        File::open(path)?.read_to_end(&mut bytes)?;
    }
    Ok(String::from_utf8(bytes)?)
}

/// Lists regular files in a directory, sorted by name.
fn sorted_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = vec![];
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Loads every file of a directory as one document.
///
/// # Arguments
///
/// * `dir` - A directory of review files.
/// * `preprocessor` - Tokenizer and filters applied to each file.
///
/// # Returns
///
/// Documents in file-name order.
///
/// # Errors
///
/// An error is returned if the directory or a file cannot be read, or a file is not UTF-8.
pub fn load_dir<P>(dir: P, preprocessor: &Preprocessor) -> Result<Vec<Document>>
where
    P: AsRef<Path>,
{
    sorted_files(dir.as_ref())?
        .iter()
        .map(|path| -> Result<Document> { Ok(preprocessor.process(&read_text(path)?)) })
        .collect()
}

/// Loads a labeled corpus from `dir/pos/` and `dir/neg/`.
///
/// Positive reviews come first, then negative reviews. A missing subdirectory is treated as
/// empty, but at least one of them must exist.
///
/// # Arguments
///
/// * `dir` - The corpus directory.
/// * `preprocessor` - Tokenizer and filters applied to each review.
///
/// # Returns
///
/// The loaded corpus.
///
/// # Errors
///
/// [`RulesError::InvalidCorpus`] is returned if neither subdirectory exists. I/O and UTF-8 errors
/// are propagated.
pub fn load_labeled_dir<P>(dir: P, preprocessor: &Preprocessor) -> Result<LabeledCorpus>
where
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    let pos_dir = dir.join("pos");
    let neg_dir = dir.join("neg");
    if !pos_dir.is_dir() && !neg_dir.is_dir() {
        return Err(RulesError::invalid_corpus(
            dir.to_path_buf(),
            "neither pos/ nor neg/ exists",
        ));
    }
    let mut corpus = LabeledCorpus::default();
    for (sub_dir, label) in [(pos_dir, Label::Positive), (neg_dir, Label::Negative)] {
        if !sub_dir.is_dir() {
            continue;
        }
        let docs = load_dir(&sub_dir, preprocessor)?;
        corpus.labels.extend(std::iter::repeat(label).take(docs.len()));
        corpus.docs.extend(docs);
    }
    Ok(corpus)
}

/// Reads one review per line.
///
/// Empty lines produce empty documents, so the output stays aligned with the input lines.
///
/// # Arguments
///
/// * `rdr` - A reader.
/// * `preprocessor` - Tokenizer and filters applied to each line.
///
/// # Returns
///
/// One document per line.
///
/// # Errors
///
/// I/O errors are propagated.
pub fn read_lines<R>(rdr: R, preprocessor: &Preprocessor) -> Result<Vec<Document>>
where
    R: BufRead,
{
    let mut docs = vec![];
    for line in rdr.lines() {
        docs.push(preprocessor.process(&line?));
    }
    Ok(docs)
}
