//! Document iterators: lazy extraction of raw documents from files.
//!
//! An iterator factory opens a file and returns a forward-only, finite
//! sequence of [`RawDocument`]s, one per call. The source file is never
//! assumed to fit in memory; documents are cut from a buffered byte
//! stream as they are encountered. Re-opening the same path restarts the
//! sequence from the beginning.
//!
//! A boundary that cannot be located (end of file inside an open markup
//! element, an element reopened before it closed) surfaces as a
//! [`MalformedStream`](crate::error::SickleError::MalformedStream) error
//! for that document; iteration may continue with the next
//! clearly-delimited boundary. A boundary is never fabricated.

use std::path::Path;

use crate::document::RawDocument;
use crate::error::Result;

/// A forward-only sequence of raw documents cut from one open file.
///
/// The file handle is owned by the iterator and released when it is
/// dropped, on every exit path.
pub trait DocumentIterator: Send {
    /// Produce the next document, `None` at end of stream.
    ///
    /// A recoverable error discards the offending document; calling again
    /// continues with the next locatable boundary.
    fn next_document(&mut self) -> Result<Option<RawDocument>>;
}

/// Factory for per-format document iterators.
pub trait IteratorFactory: Send + Sync {
    /// Open `path` and return an iterator positioned before the first
    /// document.
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentIterator>>;

    /// Get the name of this iterator family (for debugging and
    /// configuration).
    fn name(&self) -> &'static str;
}

// Individual iterator modules
pub mod paragraph;
pub mod trec;

// Re-export all iterators for convenient access
pub use paragraph::{ParagraphIterator, ParagraphIteratorFactory};
pub use trec::{TrecDocIterator, TrecIteratorFactory};
