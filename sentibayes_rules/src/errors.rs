//! Definition of errors.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

pub type Result<T, E = RulesError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum RulesError {
    InvalidCorpus(InvalidCorpusError),
    UTF8Error(std::string::FromUtf8Error),
    IOError(std::io::Error),
}

impl RulesError {
    pub(crate) fn invalid_corpus<S>(path: PathBuf, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidCorpus(InvalidCorpusError {
            path,
            msg: msg.into(),
        })
    }
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidCorpus(e) => e.fmt(f),
            Self::UTF8Error(e) => e.fmt(f),
            Self::IOError(e) => e.fmt(f),
        }
    }
}

impl Error for RulesError {}

/// Error used when a corpus directory has an unexpected layout.
#[derive(Debug)]
pub struct InvalidCorpusError {
    /// Path of the corpus.
    pub(crate) path: PathBuf,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidCorpusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidCorpusError: {}: {}", self.path.display(), self.msg)
    }
}

impl Error for InvalidCorpusError {}

impl From<std::string::FromUtf8Error> for RulesError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::UTF8Error(error)
    }
}

impl From<std::io::Error> for RulesError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error)
    }
}
