//! Error types for the STL converter

use std::io;
use thiserror::Error;

/// Converter error types
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer bytes were available than a decode step required
    #[error("Unexpected termination of file ({section})")]
    TruncatedInput {
        /// Layout region that ended early
        section: &'static str,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input could not be opened
    #[error("File load error: {0}")]
    FileLoad(String),

    /// Zip container could not be read
    #[error("Archive error: {0}")]
    Archive(String),
}

impl Error {
    /// Map a failed `read_exact` to the matching error.
    ///
    /// End of input becomes `TruncatedInput`, everything else stays an IO error.
    pub(crate) fn from_read(err: io::Error, section: &'static str) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::TruncatedInput { section }
        } else {
            Error::Io(err)
        }
    }

    /// True if the input ended before the decoder was done with it.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::TruncatedInput { .. })
    }
}

/// Result type alias for converter operations
pub type Result<T> = std::result::Result<T, Error>;
