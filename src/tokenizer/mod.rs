//! Tokenizers: byte-accurate segmentation of raw documents.
//!
//! A tokenizer consumes a [`RawDocument`], takes ownership of its buffer,
//! and produces a [`TokenizedDocument`] whose text, content, and term
//! regions are [`ByteSpan`] views into that buffer. Nothing is copied.
//!
//! Segmentation is length-bounded byte work: ASCII whitespace and
//! punctuation delimit words, every other byte (embedded NUL bytes and
//! non-ASCII sequences included) is term content. Format-specific
//! tokenizers adjust the rules (hyphenated compounds, inline markup
//! skipping) through [`SegmentRules`].

use crate::document::{ByteSpan, RawDocument, TokenizedDocument};
use crate::error::{Result, SickleError};

/// Trait for tokenizers that segment a raw document into byte ranges.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given raw document, consuming it.
    fn tokenize(&self, raw: RawDocument) -> Result<TokenizedDocument>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Format-tunable word segmentation rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct SegmentRules {
    /// Keep `word-word` compounds as a single term.
    pub keep_hyphens: bool,

    /// Keep word-interior periods and apostrophes inside the term
    /// (`U.S.A.`, `Peter's`), leaving their removal to the
    /// normalization stage. Edges still delimit.
    pub keep_word_punct: bool,

    /// Treat `<...>` runs as markup: no term content, skipped whole.
    pub skip_markup: bool,
}

fn is_word_byte(b: u8) -> bool {
    // NUL and all non-ASCII bytes are word content.
    !(b.is_ascii_whitespace() || b.is_ascii_punctuation())
}

/// Segment `bytes` into word spans, offsetting every span by `base`
/// (the position of `bytes` within the document buffer).
///
/// Fails with a tokenization error when markup skipping is enabled and an
/// inline `<` is never closed before the end of the region.
pub fn segment_bytes(bytes: &[u8], base: usize, rules: &SegmentRules) -> Result<Vec<ByteSpan>> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut i = 0;

    let flush = |start: &mut Option<usize>, end: usize, spans: &mut Vec<ByteSpan>| {
        if let Some(s) = start.take() {
            spans.push(ByteSpan::new(base + s, end - s));
        }
    };

    while i < bytes.len() {
        let b = bytes[i];

        if rules.skip_markup && b == b'<' {
            flush(&mut start, i, &mut spans);
            match bytes[i..].iter().position(|&c| c == b'>') {
                Some(offset) => i += offset + 1,
                None => {
                    return Err(SickleError::tokenization(
                        "inline markup opened but never closed",
                    ));
                }
            }
            continue;
        }

        if is_word_byte(b) {
            if start.is_none() {
                start = Some(i);
            }
            i += 1;
            continue;
        }

        let interior = match b {
            b'-' => rules.keep_hyphens,
            b'.' | b'\'' => rules.keep_word_punct,
            _ => false,
        };
        if interior && start.is_some() && i + 1 < bytes.len() && is_word_byte(bytes[i + 1]) {
            // Interior punctuation of a compound; edges still delimit.
            i += 1;
            continue;
        }

        flush(&mut start, i, &mut spans);
        i += 1;
    }
    flush(&mut start, bytes.len(), &mut spans);

    Ok(spans)
}

// Individual tokenizer modules
pub mod plain;
pub mod tagged;

// Re-export all tokenizers for convenient access
pub use plain::PlainTokenizer;
pub use tagged::TaggedTokenizer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_segmentation() {
        let rules = SegmentRules::default();
        let spans = segment_bytes(b"one  two,three", 0, &rules).unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0], ByteSpan::new(0, 3));
        assert_eq!(spans[1], ByteSpan::new(5, 3));
        assert_eq!(spans[2], ByteSpan::new(9, 5));
    }

    #[test]
    fn test_base_offset_applied() {
        let rules = SegmentRules::default();
        let spans = segment_bytes(b"word", 100, &rules).unwrap();
        assert_eq!(spans, vec![ByteSpan::new(100, 4)]);
    }

    #[test]
    fn test_embedded_nul_stays_inside_term() {
        let rules = SegmentRules::default();
        let spans = segment_bytes(b"ab\x00cd ef", 0, &rules).unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], ByteSpan::new(0, 5)); // no truncation at the NUL
    }

    #[test]
    fn test_non_ascii_bytes_are_word_content() {
        let rules = SegmentRules::default();
        let spans = segment_bytes("caf\u{e9} au".as_bytes(), 0, &rules).unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].len, 5); // two-byte UTF-8 sequence kept whole
    }

    #[test]
    fn test_hyphen_compounds() {
        let keep = SegmentRules {
            keep_hyphens: true,
            ..Default::default()
        };
        let spans = segment_bytes(b"well-known -edge trailing- a-b-c", 0, &keep).unwrap();
        let words: Vec<&[u8]> = spans
            .iter()
            .map(|s| s.slice(b"well-known -edge trailing- a-b-c"))
            .collect();
        assert_eq!(words, vec![&b"well-known"[..], b"edge", b"trailing", b"a-b-c"]);

        let split = SegmentRules::default();
        let spans = segment_bytes(b"well-known", 0, &split).unwrap();
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn test_word_interior_punctuation() {
        let keep = SegmentRules {
            keep_word_punct: true,
            ..Default::default()
        };
        let buf = b"U.S.A. Peter's end.";
        let spans = segment_bytes(buf, 0, &keep).unwrap();
        let words: Vec<&[u8]> = spans.iter().map(|s| s.slice(buf)).collect();
        // Trailing periods delimit; interior ones stay in the term.
        assert_eq!(words, vec![&b"U.S.A"[..], b"Peter's", b"end"]);

        let split = SegmentRules::default();
        let spans = segment_bytes(b"U.S.A.", 0, &split).unwrap();
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn test_markup_skipping() {
        let rules = SegmentRules {
            skip_markup: true,
            ..Default::default()
        };
        let spans = segment_bytes(b"one<b>two</b> three", 0, &rules).unwrap();
        let buf = b"one<b>two</b> three";
        let words: Vec<&[u8]> = spans.iter().map(|s| s.slice(buf)).collect();
        assert_eq!(words, vec![&b"one"[..], b"two", b"three"]);
    }

    #[test]
    fn test_unclosed_markup_is_tokenization_error() {
        let rules = SegmentRules {
            skip_markup: true,
            ..Default::default()
        };
        let err = segment_bytes(b"one <unclosed", 0, &rules).unwrap_err();
        assert!(matches!(err, SickleError::Tokenization(_)));
    }
}
