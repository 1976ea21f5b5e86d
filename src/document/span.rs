//! Byte-range views into a shared document buffer.

use serde::{Deserialize, Serialize};

/// A `(start, len)` view into a byte buffer owned by someone else.
///
/// Spans are how the tokenizer describes text, content, and term regions
/// without copying them out of the document buffer. A span never carries a
/// pointer; it is resolved against a buffer with [`ByteSpan::slice`], which
/// is length-bounded and therefore safe for content containing NUL bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteSpan {
    /// Byte offset of the first byte in the span.
    pub start: usize,

    /// Number of bytes in the span.
    pub len: usize,
}

impl ByteSpan {
    /// Create a new span.
    pub fn new(start: usize, len: usize) -> Self {
        ByteSpan { start, len }
    }

    /// The offset one past the last byte of the span.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: &ByteSpan) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }

    /// Resolve this span against its backing buffer.
    ///
    /// # Panics
    ///
    /// Panics if the span extends past the end of `buffer`. Spans are only
    /// produced by the tokenizer that owns the buffer, so an out-of-range
    /// span is a programming error, not an input error.
    pub fn slice<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.start..self.end()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basics() {
        let span = ByteSpan::new(3, 4);
        assert_eq!(span.end(), 7);
        assert!(!span.is_empty());
        assert!(ByteSpan::new(0, 0).is_empty());
    }

    #[test]
    fn test_span_containment() {
        let content = ByteSpan::new(10, 20);
        assert!(content.contains(&ByteSpan::new(10, 5)));
        assert!(content.contains(&ByteSpan::new(25, 5)));
        assert!(!content.contains(&ByteSpan::new(9, 5)));
        assert!(!content.contains(&ByteSpan::new(28, 5)));
    }

    #[test]
    fn test_span_slice_preserves_nul() {
        let buffer = b"ab\x00cd".to_vec();
        let span = ByteSpan::new(1, 3);
        assert_eq!(span.slice(&buffer), b"b\x00c");
    }
}
