//! Errors of a generator run.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can make a generator run fail. All of these are fatal.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Zero or more than one repeat count was supplied
    #[error("You must provide a single integer argument >= 2 (got {0} arguments)")]
    InvalidArgumentCount(usize),

    /// The argument is neither a base-10 nor a base-16 integer
    #[error("You must provide a single integer argument >= 2 ('{0}' is not an integer)")]
    InvalidArgumentFormat(String),

    /// The argument is an integer but smaller than the minimum repeat count
    #[error("You must provide a single integer argument >= 2 (got {0})")]
    InvalidArgumentRange(String),

    /// The argument is an integer too large to be used as a repeat count
    #[error("You must provide a single integer argument >= 2 ('{0}' is too large)")]
    InvalidArgumentTooLarge(String),

    /// The header could not be opened, truncated or written
    #[error("Could not write {}: {source}", path.display())]
    WriteError {
        /// Destination of the failed write
        path: PathBuf,

        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    pub(crate) fn write<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }
}

/// Shorthand for results carrying a [`GeneratorError`].
pub type Result<T> = std::result::Result<T, GeneratorError>;
