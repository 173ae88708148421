//! Error types for gdocmark library.

use std::io;
use thiserror::Error;

/// Result type alias for gdocmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not syntactically valid document JSON.
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A list item references a list or nesting level missing from the list table.
    #[error("List '{list_id}' has no definition for nesting level {level}")]
    UnknownList {
        /// The referenced list identifier
        list_id: String,
        /// The referenced nesting level
        level: usize,
    },

    /// Tables are nested deeper than the configured limit.
    #[error("Table nesting exceeds the limit of {0} levels")]
    NestingTooDeep(usize),

    /// Error during rendering (HTML, Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build an unresolvable list reference error.
    pub fn unknown_list(list_id: impl Into<String>, level: usize) -> Self {
        Error::UnknownList {
            list_id: list_id.into(),
            level,
        }
    }
}
