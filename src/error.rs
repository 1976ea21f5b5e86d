//! Error types for the Sickle library.
//!
//! This module provides comprehensive error handling for all Sickle
//! operations. All errors are represented by the [`SickleError`] enum,
//! which distinguishes configuration-time failures (fatal before any
//! document is processed) from per-document structural failures
//! (recoverable: skip the document, continue the stream).
//!
//! # Examples
//!
//! ```
//! use sickle::error::{Result, SickleError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SickleError::tokenization("unbalanced markup"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) if e.is_recoverable() => eprintln!("Skipping document: {e}"),
//!     Err(e) => eprintln!("Fatal: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Sickle operations.
#[derive(Error, Debug)]
pub enum SickleError {
    /// I/O errors (file operations, stream reads, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Missing or invalid required settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A format label with no registered capability bundle
    #[error("Unknown document format: {0}")]
    UnknownFormat(String),

    /// A stemmer name outside the supported set
    #[error("Unsupported stemmer: {0}")]
    UnsupportedStemmer(String),

    /// A document boundary could not be located in the input stream
    #[error("Malformed document stream: {0}")]
    MalformedStream(String),

    /// Structurally invalid document content (unbalanced delimiters, etc.)
    #[error("Tokenization error: {0}")]
    Tokenization(String),

    /// Required structural metadata absent from a tokenized document
    #[error("Parse error: {0}")]
    Parse(String),

    /// A transformation stage failed on a specific document
    #[error("Transformation error: {0}")]
    Transformation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SickleError.
pub type Result<T> = std::result::Result<T, SickleError>;

impl SickleError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        SickleError::Configuration(msg.into())
    }

    /// Create a new unknown-format error.
    pub fn unknown_format<S: Into<String>>(label: S) -> Self {
        SickleError::UnknownFormat(label.into())
    }

    /// Create a new unsupported-stemmer error.
    pub fn unsupported_stemmer<S: Into<String>>(name: S) -> Self {
        SickleError::UnsupportedStemmer(name.into())
    }

    /// Create a new malformed-stream error.
    pub fn malformed_stream<S: Into<String>>(msg: S) -> Self {
        SickleError::MalformedStream(msg.into())
    }

    /// Create a new tokenization error.
    pub fn tokenization<S: Into<String>>(msg: S) -> Self {
        SickleError::Tokenization(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SickleError::Parse(msg.into())
    }

    /// Create a new transformation error.
    pub fn transformation<S: Into<String>>(msg: S) -> Self {
        SickleError::Transformation(msg.into())
    }

    /// Whether this error is recoverable at document granularity.
    ///
    /// Recoverable errors affect a single document: the caller may skip it
    /// and continue consuming the stream. Everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SickleError::MalformedStream(_)
                | SickleError::Tokenization(_)
                | SickleError::Parse(_)
                | SickleError::Transformation(_)
        )
    }
}
