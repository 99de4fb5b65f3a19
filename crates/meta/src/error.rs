//! Metadata Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use sluice_path::error::{Error as PathError, ErrorKind as PathErrorKind};

/// A metadata error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A header the metadata contract requires was entirely absent.
    #[display("missing header {_0:?}")]
    MissingHeader(#[error(not(source))] &'static str),
    /// A header was present but its value could not be parsed.
    #[display("failed to parse header {header:?}, found value: {value:?}")]
    MalformedHeader {
        /// The header that failed to parse.
        header: &'static str,
        /// The offending value, verbatim.
        value: String,
    },
    /// A transport-encoded digest was not valid base64.
    #[display("malformed base64 digest: {_0:?}")]
    Encoding(#[error(not(source))] String),
    /// A checksum entry named an algorithm this gateway does not track.
    #[display("unknown hash algorithm: {_0:?}")]
    UnknownAlgorithm(#[error(not(source))] String),
    /// File metadata was requested for an object name addressing a folder.
    #[display("object name {_0:?} does not address a file")]
    NotAFile(#[error(not(source))] String),
    /// Folder metadata was requested for an object name addressing a file.
    #[display("object name {_0:?} does not address a folder")]
    NotAFolder(#[error(not(source))] String),
    /// The provider object name did not parse as a virtual path.
    #[display("invalid object name: {_0}")]
    Path(PathErrorKind),
}

impl ErrorKind {
    /// Convert a path error into a metadata error, preserving the path
    /// crate's `Exn` frame (error tree) as a child in its own error tree.
    #[track_caller]
    pub fn path(err: PathError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Path(inner))
    }
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A provider response is either valid metadata or it isn't; retry
        // policy belongs to the transport layer around this core.
        false
    }
}
