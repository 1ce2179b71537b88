//! Error types for the Lexitrie library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexitrieError`] enum. Trie lookups only ever fail in two ways: the key
//! has the wrong shape for the trie ([`LexitrieError::TypeMismatch`]) or the
//! key carries no value ([`LexitrieError::NotFound`]). The remaining variants
//! belong to the corpus loaders, configuration and the CLI.
//!
//! # Examples
//!
//! ```
//! use lexitrie::error::{LexitrieError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexitrieError::not_found("bat"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::trie::KeyKind;

/// The main error type for Lexitrie operations.
#[derive(Error, Debug)]
pub enum LexitrieError {
    /// A key of one shape was used against a trie locked to the other shape.
    #[error("Type mismatch: trie expects {expected} keys, got {found} key")]
    TypeMismatch { expected: KeyKind, found: KeyKind },

    /// The key has no value assigned (absent, or only a structural junction).
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O errors (corpus and configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (sentence splitting, normalization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexitrieError.
pub type Result<T> = std::result::Result<T, LexitrieError>;

impl LexitrieError {
    /// Create a new type mismatch error.
    pub fn type_mismatch(expected: KeyKind, found: KeyKind) -> Self {
        LexitrieError::TypeMismatch { expected, found }
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LexitrieError::NotFound(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexitrieError::Analysis(msg.into())
    }

    /// Whether this error reports a key-shape conflict.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, LexitrieError::TypeMismatch { .. })
    }

    /// Whether this error reports a missing key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LexitrieError::NotFound(_))
    }
}
