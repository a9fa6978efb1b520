//! Typed failures for board operations.
//!
//! The engine distinguishes recoverable insert/lookup failures from fatal
//! parse and I/O failures so a presentation layer can branch on the variant
//! (for example, show a not-found affordance) instead of aborting the
//! session.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure modes for building, navigating, and persisting a board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// An insert was attempted with an empty symbol key. Recoverable; callers
    /// may drop the item and continue.
    #[error("symbol key must not be empty")]
    InvalidKey,

    /// A selection or lookup named a key absent from the consulted scope.
    #[error("symbol '{key}' not found")]
    NotFound { key: String },

    /// A board-file line did not match `KEY TEXT` or `>KEY TEXT`. Fatal to
    /// the load.
    #[error("line {line}: expected 'KEY TEXT' or '>KEY TEXT', got '{content}'")]
    MalformedLine { line: usize, content: String },

    /// Reading or writing a board file failed.
    #[error("{}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BoardError {
    pub(crate) fn not_found(key: &str) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }
}

/// Library-wide result alias.
pub type Result<T> = std::result::Result<T, BoardError>;
