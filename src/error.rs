use std::io;

use thiserror::Error;

/// Errors surfaced by the estimators and the file analyzer.
#[derive(Debug, Error)]
pub enum Error {
    /// Probability calculation over a zero-length bit sequence.
    #[error("binary sequence length is 0, cannot calculate probabilities")]
    EmptySequence,
    /// A character other than '0' or '1' in a bit sequence.
    #[error("invalid symbol {0:?} in binary sequence, expected '0' or '1'")]
    InvalidSymbol(char),
    /// Chunked analysis requested with a zero chunk size.
    #[error("chunk size must be greater than 0")]
    ZeroChunkSize,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
