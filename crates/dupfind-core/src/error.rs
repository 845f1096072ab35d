//! Error types for dupfind
//!
//! All fallible operations return `Result<T, Error>`.
//! Every variant names the path involved so diagnostics point at the file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// dupfind error types
///
/// All errors are fatal for a run; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// Input file exists but could not be opened or read
    #[error("failed to read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Removal-words file missing or unreadable
    #[error("failed to read removal words from {}: {source}", path.display())]
    RemovalWordsUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination directory missing, permission denied, or write failure
    #[error("failed to write output file {}: {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Non-UTF-8 byte sequence in an input file
    #[error("invalid UTF-8 in {} at line {line}", path.display())]
    Decoding { path: PathBuf, line: usize },
}

/// Result type alias for dupfind operations
pub type Result<T> = std::result::Result<T, Error>;
