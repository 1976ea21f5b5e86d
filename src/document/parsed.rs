//! Parsed documents: materialized terms with ordinal positions.

use ahash::AHashMap;

use crate::document::span::ByteSpan;

/// A fully parsed document, ready for the transformation chain.
///
/// Terms are materialized strings, decoupled from the backing buffer so
/// that transformation stages can rewrite them. Each term carries one
/// position: its 0-based ordinal within the document content, assigned by
/// the parser one increment per occurrence (duplicate words get their own
/// ordinal, never merged).
///
/// The buffer and the text/content spans carry forward from the tokenized
/// stage unchanged; they back the diagnostic output and byte-exact
/// consumers.
///
/// # Invariant
///
/// `terms.len() == positions.len()` at all times, and positions are
/// strictly increasing as produced by the parser. A stage that drops a
/// term drops the aligned position with it; surviving terms keep their
/// original position values. [`ParsedDocument::is_aligned`] checks both.
#[derive(Clone, Debug)]
pub struct ParsedDocument {
    /// Document identifier.
    pub docno: String,

    /// Backing buffer carried from the tokenized document.
    pub buffer: Vec<u8>,

    /// Full extracted text.
    pub text: ByteSpan,

    /// Meaningful body, a subrange of `text`.
    pub content: ByteSpan,

    /// Materialized terms, in document order.
    pub terms: Vec<String>,

    /// One ordinal position per term.
    pub positions: Vec<usize>,

    /// Document-level metadata (structural tags, iterator-supplied pairs).
    pub metadata: AHashMap<String, String>,
}

impl ParsedDocument {
    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the document has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check the alignment invariant: one position per term, positions
    /// strictly increasing.
    pub fn is_aligned(&self) -> bool {
        self.terms.len() == self.positions.len()
            && self.positions.windows(2).all(|w| w[0] < w[1])
    }

    /// Keep only the term/position pairs whose term satisfies `keep`.
    ///
    /// This is the supported way for a stage to drop terms: the aligned
    /// position goes with the term, so the invariant holds afterwards.
    pub fn retain_terms<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        let mut kept_positions = Vec::with_capacity(self.positions.len());
        let mut index = 0;
        self.terms.retain(|term| {
            let keep_it = keep(term);
            if keep_it {
                kept_positions.push(self.positions[index]);
            }
            index += 1;
            keep_it
        });
        self.positions = kept_positions;
    }
}
