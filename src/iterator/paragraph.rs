//! Iterator over blank-line-delimited paragraph files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::document::RawDocument;
use crate::error::Result;
use crate::iterator::{DocumentIterator, IteratorFactory};

/// Factory for [`ParagraphIterator`].
#[derive(Clone, Debug, Default)]
pub struct ParagraphIteratorFactory;

impl ParagraphIteratorFactory {
    /// Create a new factory.
    pub fn new() -> Self {
        ParagraphIteratorFactory
    }
}

impl IteratorFactory for ParagraphIteratorFactory {
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentIterator>> {
        Ok(Box::new(ParagraphIterator::open(path)?))
    }

    fn name(&self) -> &'static str {
        "paragraph"
    }
}

/// Yields each run of non-blank lines as one document.
///
/// Paragraph files carry no in-band identifier, so the iterator stamps a
/// synthesized 1-based ordinal into the raw document's metadata under
/// `docno`; the parser falls back to it. Any byte content is acceptable,
/// so this iterator has no malformed case.
pub struct ParagraphIterator {
    reader: BufReader<File>,
    ordinal: usize,
    done: bool,
}

impl ParagraphIterator {
    /// Open a paragraph file.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(ParagraphIterator {
            reader: BufReader::new(file),
            ordinal: 0,
            done: false,
        })
    }
}

impl DocumentIterator for ParagraphIterator {
    fn next_document(&mut self) -> Result<Option<RawDocument>> {
        if self.done {
            return Ok(None);
        }

        let mut line = Vec::new();
        let mut buffer = Vec::new();

        // Skip blank lines between paragraphs.
        loop {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                self.done = true;
                return Ok(None);
            }
            if !line.trim_ascii().is_empty() {
                buffer.extend_from_slice(&line);
                break;
            }
        }

        // Accumulate until the next blank line or end of file.
        loop {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                self.done = true;
                break;
            }
            if line.trim_ascii().is_empty() {
                break;
            }
            buffer.extend_from_slice(&line);
        }

        self.ordinal += 1;
        Ok(Some(
            RawDocument::new(buffer).with_metadata("docno", self.ordinal.to_string()),
        ))
    }
}
