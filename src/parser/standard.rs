//! Standard parser shared by the built-in formats.

use ahash::AHashMap;

use crate::document::{ParsedDocument, TokenizedDocument};
use crate::error::{Result, SickleError};
use crate::parser::Parser;

/// Parser that assigns ordinal positions and resolves the document
/// identifier.
///
/// Positions are 0-based and strictly increasing, one increment per term
/// occurrence; duplicate words each get their own ordinal. Terms are
/// materialized as strings, decoupled from the backing buffer: embedded
/// NUL bytes survive (NUL is valid UTF-8), invalid sequences are replaced
/// with U+FFFD. Byte-exact consumers should read the tokenized spans
/// before parsing.
///
/// The identifier comes from the `docno` structural tag, falling back to
/// iterator-supplied metadata. A document with neither fails to parse.
#[derive(Clone, Debug, Default)]
pub struct StandardParser;

impl StandardParser {
    /// Create a new standard parser.
    pub fn new() -> Self {
        StandardParser
    }
}

impl Parser for StandardParser {
    fn parse(&self, tokenized: TokenizedDocument) -> Result<ParsedDocument> {
        let mut metadata: AHashMap<String, String> = AHashMap::new();
        for (key, span) in &tokenized.tags {
            let value = String::from_utf8_lossy(span.slice(&tokenized.buffer));
            metadata.insert(key.clone(), value.trim().to_string());
        }
        for (key, value) in &tokenized.metadata {
            metadata
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }

        let docno = metadata
            .get("docno")
            .filter(|value| !value.is_empty())
            .cloned()
            .ok_or_else(|| SickleError::parse("document has no docno"))?;

        let terms: Vec<String> = tokenized
            .terms
            .iter()
            .map(|span| String::from_utf8_lossy(span.slice(&tokenized.buffer)).into_owned())
            .collect();
        let positions: Vec<usize> = (0..terms.len()).collect();

        Ok(ParsedDocument {
            docno,
            buffer: tokenized.buffer,
            text: tokenized.text,
            content: tokenized.content,
            terms,
            positions,
            metadata,
        })
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
