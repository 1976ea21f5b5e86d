//! Tokenizer for tag-structured TREC collection documents.

use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::document::{ByteSpan, RawDocument, TokenizedDocument};
use crate::error::{Result, SickleError};
use crate::tokenizer::{SegmentRules, Tokenizer, segment_bytes};

/// Closing document marker, shared by every tagged configuration.
static DOC_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</doc>").expect("valid literal pattern"));

/// Compiled patterns for one structural element.
struct TagPattern {
    name: String,
    /// Balanced `<name> ... </name>` region, capture 1 is the interior.
    region: Regex,
    open: Regex,
    close: Regex,
}

impl TagPattern {
    fn compile(name: &str) -> Result<Self> {
        let make = |pattern: String| {
            Regex::new(&pattern)
                .map_err(|e| SickleError::tokenization(format!("invalid tag pattern: {e}")))
        };
        Ok(TagPattern {
            name: name.to_string(),
            region: make(format!(r"(?is)<{name}>(.*?)</{name}>"))?,
            open: make(format!(r"(?i)<{name}>"))?,
            close: make(format!(r"(?i)</{name}>"))?,
        })
    }

    /// Open and close markers must pair up; a dangling side means the
    /// document structure is broken.
    fn check_balanced(&self, buffer: &[u8]) -> Result<()> {
        let opens = self.open.find_iter(buffer).count();
        let closes = self.close.find_iter(buffer).count();
        if opens != closes {
            return Err(SickleError::tokenization(format!(
                "unbalanced <{}> element",
                self.name
            )));
        }
        Ok(())
    }
}

/// How the meaningful body of a document is located.
enum ContentRule {
    /// Content is the union of the named tagged regions (trec-text).
    Tagged(Vec<TagPattern>),
    /// Content runs from the end of the header block to the final
    /// `</DOC>` marker (trec-web).
    AfterHeader,
}

/// Tokenizer for `<DOC>`-structured documents.
///
/// Structural metadata elements (`DOCNO`, `DOCHDR`) are located with
/// case-insensitive byte regexes compiled once at construction, so the
/// tokenizer is immutable afterwards and safe to share across threads.
/// Word segmentation inside content regions follows [`SegmentRules`];
/// both TREC configurations skip inline markup.
pub struct TaggedTokenizer {
    name: &'static str,
    metadata_tags: Vec<TagPattern>,
    content: ContentRule,
    rules: SegmentRules,
}

impl TaggedTokenizer {
    /// Configuration for trec-text: content lives in `<TEXT>` and
    /// `<HEADLINE>` regions.
    pub fn trec_text() -> Result<Self> {
        Ok(TaggedTokenizer {
            name: "trec-text",
            metadata_tags: vec![TagPattern::compile("docno")?],
            content: ContentRule::Tagged(vec![
                TagPattern::compile("text")?,
                TagPattern::compile("headline")?,
            ]),
            rules: SegmentRules {
                keep_hyphens: false,
                keep_word_punct: true,
                skip_markup: true,
            },
        })
    }

    /// Configuration for trec-web: content is everything after the
    /// `</DOCHDR>` header block, with inline HTML markup skipped.
    pub fn trec_web() -> Result<Self> {
        Ok(TaggedTokenizer {
            name: "trec-web",
            metadata_tags: vec![TagPattern::compile("docno")?, TagPattern::compile("dochdr")?],
            content: ContentRule::AfterHeader,
            rules: SegmentRules {
                keep_hyphens: false,
                keep_word_punct: true,
                skip_markup: true,
            },
        })
    }

    fn span_of(m: regex::bytes::Match<'_>) -> ByteSpan {
        ByteSpan::new(m.start(), m.end() - m.start())
    }

    /// Locate the content span and its word spans for a tagged-region
    /// document.
    fn tagged_content(
        &self,
        buffer: &[u8],
        regions: &[TagPattern],
    ) -> Result<(ByteSpan, Vec<ByteSpan>)> {
        let mut region_spans = Vec::new();
        for pattern in regions {
            pattern.check_balanced(buffer)?;
            for caps in pattern.region.captures_iter(buffer) {
                if let Some(interior) = caps.get(1) {
                    region_spans.push(Self::span_of(interior));
                }
            }
        }
        region_spans.sort_by_key(|span| span.start);

        let Some(first) = region_spans.first() else {
            // No content region; an empty span at the end of the text.
            return Ok((ByteSpan::new(buffer.len(), 0), Vec::new()));
        };
        let last = region_spans.last().unwrap_or(first);
        let content = ByteSpan::new(first.start, last.end() - first.start);

        let mut terms = Vec::new();
        for region in &region_spans {
            terms.extend(segment_bytes(region.slice(buffer), region.start, &self.rules)?);
        }
        Ok((content, terms))
    }

    /// Locate the content span for a header-then-body document: after the
    /// last present structural element, up to the final `</DOC>` marker.
    fn after_header_content(&self, buffer: &[u8]) -> Result<(ByteSpan, Vec<ByteSpan>)> {
        for pattern in &self.metadata_tags {
            pattern.check_balanced(buffer)?;
        }

        let start = self
            .metadata_tags
            .iter()
            .rev()
            .find_map(|pattern| pattern.close.find_iter(buffer).last())
            .map(|m| m.end())
            .unwrap_or_else(|| {
                // No structural elements at all; skip the <DOC> line.
                buffer
                    .iter()
                    .position(|&b| b == b'\n')
                    .map(|i| i + 1)
                    .unwrap_or(0)
            });

        let end = DOC_CLOSE
            .find_iter(buffer)
            .last()
            .map(|m| m.start())
            .unwrap_or(buffer.len());
        let end = end.max(start);

        let content = ByteSpan::new(start, end - start);
        let terms = segment_bytes(content.slice(buffer), content.start, &self.rules)?;
        Ok((content, terms))
    }
}

impl Tokenizer for TaggedTokenizer {
    fn tokenize(&self, raw: RawDocument) -> Result<TokenizedDocument> {
        let (buffer, metadata) = raw.into_parts();
        let text = ByteSpan::new(0, buffer.len());

        let mut tags = Vec::new();
        for pattern in &self.metadata_tags {
            if let Some(interior) = pattern.region.captures(&buffer).and_then(|c| c.get(1)) {
                tags.push((pattern.name.clone(), Self::span_of(interior)));
            }
        }

        let (content, terms) = match &self.content {
            ContentRule::Tagged(regions) => self.tagged_content(&buffer, regions)?,
            ContentRule::AfterHeader => self.after_header_content(&buffer)?,
        };

        Ok(TokenizedDocument {
            buffer,
            text,
            content,
            terms,
            tags,
            metadata,
        })
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
