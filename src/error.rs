//! Error types.

use thiserror::Error;

use crate::pass::{MAX_LENGTH, MIN_LENGTH};

/// Rejected password length input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password length is required")]
    Required,

    #[error("Password length must be a number, got '{0}'")]
    NotANumber(String),

    #[error("Password length must be a whole number, got '{0}'")]
    NotWhole(String),

    #[error("Password length must be at least {min}")]
    TooShort { min: usize },

    #[error("Password length must be at most {max}")]
    TooLong { max: usize },
}

impl ValidationError {
    pub(crate) fn too_short() -> Self {
        ValidationError::TooShort { min: MIN_LENGTH }
    }

    pub(crate) fn too_long() -> Self {
        ValidationError::TooLong { max: MAX_LENGTH }
    }
}

/// Sampling failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Select at least one character class")]
    EmptyPool,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Args(#[from] crate::cli::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
