//! Iterator over `<DOC>`-delimited TREC collection files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::document::RawDocument;
use crate::error::{Result, SickleError};
use crate::iterator::{DocumentIterator, IteratorFactory};

/// Factory for [`TrecDocIterator`].
///
/// Shared by the trec-text and trec-web formats; the document boundary
/// markers are the same, only tokenization differs.
#[derive(Clone, Debug, Default)]
pub struct TrecIteratorFactory;

impl TrecIteratorFactory {
    /// Create a new factory.
    pub fn new() -> Self {
        TrecIteratorFactory
    }
}

impl IteratorFactory for TrecIteratorFactory {
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentIterator>> {
        Ok(Box::new(TrecDocIterator::open(path)?))
    }

    fn name(&self) -> &'static str {
        "trec"
    }
}

/// Cuts `<DOC>` ... `</DOC>` blocks out of a buffered byte stream.
///
/// Lines are read with `read_until`, so document bodies may contain NUL
/// bytes and arbitrary non-ASCII sequences. Boundary markers are matched
/// on their own line, ASCII case-insensitively.
///
/// Recovery: a `<DOC>` encountered before the previous block closed
/// discards the partial block and reports it; the next call resumes at
/// the new marker. End of file inside an open block discards the partial
/// block and ends the stream.
#[derive(Debug)]
pub struct TrecDocIterator {
    reader: BufReader<File>,
    /// An opening marker has been consumed whose block is still pending.
    open_pending: bool,
    done: bool,
}

impl TrecDocIterator {
    /// Open a TREC collection file.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(TrecDocIterator {
            reader: BufReader::new(file),
            open_pending: false,
            done: false,
        })
    }
}

impl DocumentIterator for TrecDocIterator {
    fn next_document(&mut self) -> Result<Option<RawDocument>> {
        if self.done {
            return Ok(None);
        }

        let mut line = Vec::new();

        if !self.open_pending {
            // Scan for the next opening marker; bytes between documents
            // are not document content and are skipped.
            loop {
                line.clear();
                if self.reader.read_until(b'\n', &mut line)? == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if line.trim_ascii().eq_ignore_ascii_case(b"<DOC>") {
                    self.open_pending = true;
                    break;
                }
            }
        }

        let mut buffer = b"<DOC>\n".to_vec();
        loop {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                self.done = true;
                self.open_pending = false;
                return Err(SickleError::malformed_stream(
                    "end of file inside an open <DOC> element",
                ));
            }

            let trimmed = line.trim_ascii();
            if trimmed.eq_ignore_ascii_case(b"</DOC>") {
                buffer.extend_from_slice(&line);
                self.open_pending = false;
                return Ok(Some(RawDocument::new(buffer)));
            }
            if trimmed.eq_ignore_ascii_case(b"<DOC>") {
                // The previous block never closed; discard it and resume
                // at this marker on the next call.
                return Err(SickleError::malformed_stream(
                    "<DOC> opened before the previous </DOC>",
                ));
            }

            buffer.extend_from_slice(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_two_documents() {
        let file = write_file(
            b"<DOC>\n<DOCNO>A</DOCNO>\nbody one\n</DOC>\n\
              <DOC>\n<DOCNO>B</DOCNO>\nbody two\n</DOC>\n",
        );
        let mut iter = TrecDocIterator::open(file.path()).unwrap();

        let first = iter.next_document().unwrap().unwrap();
        assert!(first.as_bytes().starts_with(b"<DOC>\n<DOCNO>A</DOCNO>"));
        let second = iter.next_document().unwrap().unwrap();
        assert!(second.as_bytes().ends_with(b"</DOC>\n"));
        assert!(iter.next_document().unwrap().is_none());
    }

    #[test]
    fn test_reopen_restarts() {
        let file = write_file(b"<DOC>\nx\n</DOC>\n");
        for _ in 0..2 {
            let mut iter = TrecDocIterator::open(file.path()).unwrap();
            assert!(iter.next_document().unwrap().is_some());
            assert!(iter.next_document().unwrap().is_none());
        }
    }

    #[test]
    fn test_unclosed_block_recovers_at_next_marker() {
        let file = write_file(
            b"<DOC>\nno closing marker\n\
              <DOC>\nsecond body\n</DOC>\n",
        );
        let mut iter = TrecDocIterator::open(file.path()).unwrap();

        let err = iter.next_document().unwrap_err();
        assert!(err.is_recoverable());

        let doc = iter.next_document().unwrap().unwrap();
        assert!(doc.as_bytes().ends_with(b"second body\n</DOC>\n"));
        assert!(iter.next_document().unwrap().is_none());
    }

    #[test]
    fn test_eof_inside_block() {
        let file = write_file(b"<DOC>\ntruncated");
        let mut iter = TrecDocIterator::open(file.path()).unwrap();

        let err = iter.next_document().unwrap_err();
        assert!(matches!(err, SickleError::MalformedStream(_)));
        assert!(iter.next_document().unwrap().is_none());
    }

    #[test]
    fn test_body_may_contain_nul_bytes() {
        let file = write_file(b"<DOC>\nab\x00cd\n</DOC>\n");
        let mut iter = TrecDocIterator::open(file.path()).unwrap();

        let doc = iter.next_document().unwrap().unwrap();
        assert!(doc.as_bytes().windows(5).any(|w| w == b"b\x00cd\n"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TrecDocIterator::open(Path::new("/nonexistent/input.trec")).unwrap_err();
        assert!(matches!(err, SickleError::Io(_)));
    }
}
