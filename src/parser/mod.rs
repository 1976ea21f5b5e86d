//! Parsers: from tokenized byte ranges to positioned term sequences.

use crate::document::{ParsedDocument, TokenizedDocument};
use crate::error::Result;

/// Trait for parsers that finish a tokenized document.
///
/// A parser materializes the term strings, assigns each term its ordinal
/// position, and resolves document-level structural metadata (the
/// document identifier above all). It consumes the tokenized document and
/// carries the backing buffer forward.
pub trait Parser: Send + Sync {
    /// Parse the given tokenized document, consuming it.
    fn parse(&self, tokenized: TokenizedDocument) -> Result<ParsedDocument>;

    /// Get the name of this parser (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual parser modules
pub mod standard;

// Re-export all parsers for convenient access
pub use standard::StandardParser;
