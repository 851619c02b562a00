//! Error types for the Folio engine.

use thiserror::Error;

/// All possible errors from the Folio engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index, count, or option outside its valid domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A submission with one or more required fields left empty.
    #[error("incomplete input: {0}")]
    IncompleteInput(String),
}

impl Error {
    /// Build an `InvalidArgument` for an index that falls outside `[0, bound)`.
    pub(crate) fn out_of_range(name: &str, value: usize, bound: usize) -> Self {
        Error::InvalidArgument(format!("{name} {value} is outside [0, {bound})"))
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
