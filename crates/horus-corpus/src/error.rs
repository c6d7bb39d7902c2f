//! Corpus loading errors.

use std::path::PathBuf;

/// Result alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Failure while reading a JSON-lines corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The corpus file could not be opened.
    #[error("cannot open corpus {path}")]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading a line failed part way through the stream.
    #[error("read error at line {line}")]
    Read {
        /// 1-based line number.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line is not a valid sentence record.
    #[error("malformed sentence at line {line}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What the JSON decoder rejected.
        #[source]
        source: serde_json::Error,
    },
}
