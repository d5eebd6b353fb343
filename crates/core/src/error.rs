use thiserror::Error;

use crate::conjugator::ConjugationError;
use crate::model::DictionaryError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Conjugation(#[from] ConjugationError),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}
