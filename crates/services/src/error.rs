//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use conjuga_core::ConjugationError;
use conjuga_core::model::DictionaryError;

/// Errors emitted while fetching the verb dictionary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DictionaryLoadError {
    #[error("failed to read verb dictionary at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("verb dictionary request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Invalid(#[from] DictionaryError),
}

/// Errors emitted while validating practice settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("sequence length must be > 0")]
    ZeroLength,
    #[error("at least one tense must be enabled")]
    NoTenses,
}

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("verb dictionary has no verbs to practice")]
    EmptyDictionary,
    #[error("practice sequence is empty")]
    Empty,
    #[error("sequence index {index} is outside the verb/tense grid")]
    IndexOutOfRange { index: usize },
    #[error("current exercise is not complete")]
    Incomplete,
    #[error("verb `{verb}` is not part of this session")]
    VerbNotInSequence { verb: String },
    #[error(transparent)]
    Conjugation(#[from] ConjugationError),
    #[error(transparent)]
    Dictionary(#[from] DictionaryLoadError),
}
