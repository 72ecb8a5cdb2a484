//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = SentibayesError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum SentibayesError {
    InvalidArgument(InvalidArgumentError),
    InvalidDataset(InvalidDatasetError),
}

impl SentibayesError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn invalid_dataset<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidDataset(InvalidDatasetError { msg: msg.into() })
    }
}

impl fmt::Display for SentibayesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => e.fmt(f),
            Self::InvalidDataset(e) => e.fmt(f),
        }
    }
}

impl Error for SentibayesError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when documents and labels do not line up.
#[derive(Debug)]
pub struct InvalidDatasetError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidDatasetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidDatasetError: {}", self.msg)
    }
}

impl Error for InvalidDatasetError {}
