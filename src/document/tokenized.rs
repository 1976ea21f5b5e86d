//! Tokenized documents: byte-accurate segmentation of a raw document.

use crate::document::span::ByteSpan;

/// A raw document segmented into text, content, and term byte ranges.
///
/// The tokenized document owns the backing buffer (moved out of the raw
/// document, never copied). Every region is a [`ByteSpan`] view into that
/// buffer:
///
/// - `text` - the full extracted text of the document
/// - `content` - the meaningful body, a subrange of `text` with structural
///   markup stripped
/// - `terms` - ordered word ranges, each lying within `content`
/// - `tags` - structural metadata regions found during tokenization
///   (for example a `DOCNO` element), keyed by lowercased tag name
///
/// # Invariant
///
/// Every term span lies within the content span. Tokenizers uphold this by
/// construction; [`TokenizedDocument::terms_within_content`] checks it.
#[derive(Clone, Debug)]
pub struct TokenizedDocument {
    /// The backing buffer for every span in this document.
    pub buffer: Vec<u8>,

    /// Full extracted text.
    pub text: ByteSpan,

    /// Meaningful body, a subrange of `text`.
    pub content: ByteSpan,

    /// Ordered term ranges within `content`.
    pub terms: Vec<ByteSpan>,

    /// Structural metadata regions, keyed by lowercased tag name.
    pub tags: Vec<(String, ByteSpan)>,

    /// Metadata carried over from the raw document.
    pub metadata: Vec<(String, String)>,
}

impl TokenizedDocument {
    /// The full text bytes.
    pub fn text_bytes(&self) -> &[u8] {
        self.text.slice(&self.buffer)
    }

    /// The content bytes.
    pub fn content_bytes(&self) -> &[u8] {
        self.content.slice(&self.buffer)
    }

    /// Length of the full text in bytes.
    pub fn text_len(&self) -> usize {
        self.text.len
    }

    /// Length of the content region in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len
    }

    /// The bytes of the term at `index`.
    pub fn term_bytes(&self, index: usize) -> &[u8] {
        self.terms[index].slice(&self.buffer)
    }

    /// Look up a structural tag region by lowercased name.
    pub fn tag(&self, name: &str) -> Option<ByteSpan> {
        self.tags
            .iter()
            .find(|(tag, _)| tag == name)
            .map(|(_, span)| *span)
    }

    /// Check that every term span lies within the content span.
    pub fn terms_within_content(&self) -> bool {
        self.terms.iter().all(|term| self.content.contains(term))
    }
}
