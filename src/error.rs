use thiserror::Error;

/// Errors raised by the track library.
///
/// Keyed lookups never produce these; they return `None` instead so the
/// front end can show a "not found" message without unwinding anything.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Track {0} not found")]
    NotFound(String),

    #[error("Rating should be between 1 and 5 (got {0})")]
    InvalidRating(u8),

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
