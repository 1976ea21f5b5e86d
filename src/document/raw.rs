//! Raw documents as cut from a source file.

use crate::document::span::ByteSpan;

/// One document's bytes, exactly as extracted from the source file.
///
/// A raw document is produced by a document iterator and owned exclusively
/// by it until handed to a tokenizer, which consumes it and takes over the
/// buffer. The buffer is immutable for the lifetime of the value.
///
/// Iterators may attach metadata discovered at iteration time. Formats
/// without in-band identifiers (blank-line-delimited paragraphs) use this
/// to stamp a synthesized document number the parser can fall back to.
#[derive(Clone, Debug)]
pub struct RawDocument {
    buffer: Vec<u8>,
    metadata: Vec<(String, String)>,
}

impl RawDocument {
    /// Create a raw document from an owned byte buffer.
    pub fn new(buffer: Vec<u8>) -> Self {
        RawDocument {
            buffer,
            metadata: Vec::new(),
        }
    }

    /// Attach an iterator-supplied metadata pair.
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata.push((key.into(), value.into()));
        self
    }

    /// The document bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Length of the document in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// A span covering the whole buffer.
    pub fn full_span(&self) -> ByteSpan {
        ByteSpan::new(0, self.buffer.len())
    }

    /// Iterator-supplied metadata pairs.
    pub fn metadata(&self) -> &[(String, String)] {
        &self.metadata
    }

    /// Consume the document, yielding the buffer and metadata.
    pub fn into_parts(self) -> (Vec<u8>, Vec<(String, String)>) {
        (self.buffer, self.metadata)
    }
}
