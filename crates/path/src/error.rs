//! Path Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A path error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for path operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The raw string was empty. The root is spelled `/`, never `""`.
    #[display("empty path")]
    Empty,
    /// A segment was `.` or `..`. Keys encoding traversal would let two raw
    /// strings alias one location while comparing unequal.
    #[display("traversal segment in path: {_0:?}")]
    Traversal(#[error(not(source))] String),
    /// A segment contained a NUL byte.
    #[display("NUL byte in path: {_0:?}")]
    NulByte(#[error(not(source))] String),
    /// A child name was empty, a traversal segment, or contained a separator.
    #[display("invalid child name: {_0:?}")]
    InvalidChild(#[error(not(source))] String),
    /// `child()` was called on a file path.
    #[display("cannot address a child of file path {_0:?}")]
    ChildOfFile(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A malformed path stays malformed; the caller has to re-derive it.
        false
    }
}
