//! Error types for the Javelin library.
//!
//! All fallible operations report through the [`JavelinError`] enum. Every
//! failure is local and synchronous; the engine never retries internally.
//!
//! # Examples
//!
//! ```
//! use javelin::error::{JavelinError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(JavelinError::invalid_query("query word is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Javelin operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JavelinError {
    /// Document id is negative or already in use.
    #[error("Invalid document id: {id}")]
    InvalidDocumentId {
        /// The offending id.
        id: i32,
    },

    /// A document, query, or stop-word token contains a control character.
    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    /// A query token has a malformed minus marker or is empty after
    /// stripping it.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Lookup against a document id that is not live.
    #[error("Document not found: {0}")]
    DocumentNotFound(i32),

    /// Internal error (e.g. thread pool construction).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for operations that may fail with [`JavelinError`].
pub type Result<T> = std::result::Result<T, JavelinError>;

impl JavelinError {
    /// Create a new invalid-word error.
    pub fn invalid_word<S: Into<String>>(word: S) -> Self {
        JavelinError::InvalidWord(word.into())
    }

    /// Create a new invalid-query error.
    pub fn invalid_query<S: Into<String>>(msg: S) -> Self {
        JavelinError::InvalidQuery(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        JavelinError::Internal(msg.into())
    }
}
