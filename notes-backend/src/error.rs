//! Error types shared by the stores, services and controllers

use thiserror::Error;

/// Result type for note and share operations
pub type Result<T> = std::result::Result<T, NotesError>;

#[derive(Error, Debug)]
pub enum NotesError {
    /// Note or share token absent. Expired and dangling grants land here too.
    #[error("Note not found")]
    NotFound,

    /// A required field is missing or empty
    #[error("Invalid request: {0}")]
    Invalid(String),

    #[error("SQLite error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

impl NotesError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
