//! Tokenizer for plain paragraph documents.

use unicode_segmentation::UnicodeSegmentation;

use crate::document::{ByteSpan, RawDocument, TokenizedDocument};
use crate::error::Result;
use crate::tokenizer::{SegmentRules, Tokenizer, segment_bytes};

/// Tokenizer for unstructured text: the whole buffer is both text and
/// content.
///
/// Valid UTF-8 input is segmented on Unicode word boundaries (UAX #29),
/// which handles international text properly; hyphenated compounds are
/// kept as single terms. Input that is not valid UTF-8 falls back to byte
/// segmentation, so arbitrary byte content still tokenizes without
/// truncation.
#[derive(Clone, Debug)]
pub struct PlainTokenizer {
    rules: SegmentRules,
}

impl PlainTokenizer {
    /// Create a new plain tokenizer.
    pub fn new() -> Self {
        PlainTokenizer {
            rules: SegmentRules {
                keep_hyphens: true,
                keep_word_punct: true,
                skip_markup: false,
            },
        }
    }

    /// Word spans via Unicode word boundaries, with `word-word` compounds
    /// merged into one span.
    fn segment_unicode(&self, text: &str) -> Vec<ByteSpan> {
        let mut spans: Vec<ByteSpan> = Vec::new();
        let mut prev_was_word = false;
        let mut pending_hyphen = false;

        for (offset, segment) in text.split_word_bound_indices() {
            let is_word = segment.chars().any(|c| c.is_alphanumeric());
            if is_word {
                if pending_hyphen && self.rules.keep_hyphens {
                    if let Some(last) = spans.last_mut() {
                        last.len = offset + segment.len() - last.start;
                    }
                } else {
                    spans.push(ByteSpan::new(offset, segment.len()));
                }
                pending_hyphen = false;
                prev_was_word = true;
            } else if segment == "-" && prev_was_word {
                pending_hyphen = true;
                prev_was_word = false;
            } else {
                pending_hyphen = false;
                prev_was_word = false;
            }
        }
        spans
    }
}

impl Default for PlainTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for PlainTokenizer {
    fn tokenize(&self, raw: RawDocument) -> Result<TokenizedDocument> {
        let (buffer, metadata) = raw.into_parts();
        let full = ByteSpan::new(0, buffer.len());

        let terms = match std::str::from_utf8(&buffer) {
            Ok(text) => self.segment_unicode(text),
            Err(_) => segment_bytes(&buffer, 0, &self.rules)?,
        };

        Ok(TokenizedDocument {
            buffer,
            text: full,
            content: full,
            terms,
            tags: Vec::new(),
            metadata,
        })
    }

    fn name(&self) -> &'static str {
        "plain-paragraph"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(doc: &TokenizedDocument) -> Vec<&[u8]> {
        doc.terms.iter().map(|s| s.slice(&doc.buffer)).collect()
    }

    #[test]
    fn test_plain_tokenization() {
        let tokenizer = PlainTokenizer::new();
        let doc = tokenizer
            .tokenize(RawDocument::new(b"Hello, world! This is plain text.".to_vec()))
            .unwrap();

        assert_eq!(
            words(&doc),
            vec![&b"Hello"[..], b"world", b"This", b"is", b"plain", b"text"]
        );
        assert_eq!(doc.content_len(), doc.text_len());
        assert!(doc.terms_within_content());
    }

    #[test]
    fn test_hyphenated_compounds_preserved() {
        let tokenizer = PlainTokenizer::new();
        let doc = tokenizer
            .tokenize(RawDocument::new(b"a well-known state-of-the-art method".to_vec()))
            .unwrap();

        assert_eq!(
            words(&doc),
            vec![&b"a"[..], b"well-known", b"state-of-the-art", b"method"]
        );
    }

    #[test]
    fn test_unicode_words() {
        let tokenizer = PlainTokenizer::new();
        let doc = tokenizer
            .tokenize(RawDocument::new("caf\u{e9} r\u{e9}sum\u{e9}".as_bytes().to_vec()))
            .unwrap();

        assert_eq!(doc.terms.len(), 2);
        assert_eq!(doc.term_bytes(0), "caf\u{e9}".as_bytes());
    }

    #[test]
    fn test_contractions_stay_whole() {
        let tokenizer = PlainTokenizer::new();
        let doc = tokenizer
            .tokenize(RawDocument::new(b"don't stop".to_vec()))
            .unwrap();

        assert_eq!(words(&doc), vec![&b"don't"[..], b"stop"]);
    }

    #[test]
    fn test_invalid_utf8_falls_back_to_bytes() {
        let tokenizer = PlainTokenizer::new();
        let doc = tokenizer
            .tokenize(RawDocument::new(b"ok \xFF\xFEraw".to_vec()))
            .unwrap();

        assert_eq!(words(&doc), vec![&b"ok"[..], b"\xFF\xFEraw"]);
    }

    #[test]
    fn test_metadata_carried_through() {
        let tokenizer = PlainTokenizer::new();
        let doc = tokenizer
            .tokenize(RawDocument::new(b"x".to_vec()).with_metadata("docno", "3"))
            .unwrap();
        assert_eq!(doc.metadata, vec![("docno".to_string(), "3".to_string())]);
    }
}
