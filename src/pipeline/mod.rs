//! The document transformation pipeline.
//!
//! A [`Pipeline`] ties together a format's capability bundle and an
//! ordered transformation chain. Construction resolves every selection
//! up front — unknown format labels and unsupported stemmer names fail
//! here, before any file is opened. Documents then flow one at a time:
//!
//! ```text
//! file -> iterator -> RawDocument -> tokenizer -> parser -> chain -> terms
//! ```
//!
//! Per-document structural errors are yielded inline by the
//! [`DocumentStream`] and counted; the caller decides whether to
//! continue (they are recoverable) while fatal errors end the stream.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::document::{ParsedDocument, RawDocument};
use crate::error::{Result, SickleError};
use crate::format::{CapabilityBundle, FormatRegistry};
use crate::iterator::DocumentIterator;
use crate::transform::stem::{self, StemmerConfig};
use crate::transform::{CaseFoldStage, NormalizeStage, TransformChain};

fn default_true() -> bool {
    true
}

/// Pipeline configuration, fixed before any document is processed.
///
/// This is an explicit value handed to [`Pipeline::new`]; there is no
/// process-wide parameter store. The normalization and case-folding
/// stages are on by default; a stemmer runs only when named.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Format label to resolve against the registry.
    pub format: String,

    /// Optional stemmer name (closed set, see [`stem::select`]).
    #[serde(default)]
    pub stemmer: Option<String>,

    /// Configuration for the selected stemmer.
    #[serde(default)]
    pub stemmer_config: StemmerConfig,

    /// Run the term-normalization stage.
    #[serde(default = "default_true")]
    pub normalize: bool,

    /// Run the case-folding stage.
    #[serde(default = "default_true")]
    pub case_fold: bool,
}

impl PipelineConfig {
    /// Create a configuration for the given format label.
    pub fn new<S: Into<String>>(format: S) -> Self {
        PipelineConfig {
            format: format.into(),
            stemmer: None,
            stemmer_config: StemmerConfig::default(),
            normalize: true,
            case_fold: true,
        }
    }

    /// Select a stemmer by name.
    pub fn with_stemmer<S: Into<String>>(mut self, name: S) -> Self {
        self.stemmer = Some(name.into());
        self
    }

    /// Enable or disable the normalization stage.
    pub fn normalize(mut self, enabled: bool) -> Self {
        self.normalize = enabled;
        self
    }

    /// Enable or disable the case-folding stage.
    pub fn case_fold(mut self, enabled: bool) -> Self {
        self.case_fold = enabled;
        self
    }
}

/// Counters for one document stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamStats {
    /// Documents that made it through the full pipeline.
    pub emitted: usize,

    /// Documents skipped over recoverable errors.
    pub skipped: usize,
}

/// A configured document transformation pipeline.
///
/// Everything inside is immutable after construction, so one pipeline
/// can serve many streams, and distinct documents may be transformed
/// from multiple threads.
pub struct Pipeline {
    bundle: Arc<CapabilityBundle>,
    chain: TransformChain,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("bundle", &self.bundle)
            .field("chain", &self.chain)
            .finish()
    }
}

impl Pipeline {
    /// Build a pipeline from configuration.
    ///
    /// Fails before any I/O on an empty format label, an unknown format,
    /// or an unsupported stemmer name.
    pub fn new(config: &PipelineConfig, registry: &FormatRegistry) -> Result<Self> {
        if config.format.trim().is_empty() {
            return Err(SickleError::configuration("a format label is required"));
        }
        let bundle = registry.resolve(&config.format)?;

        let mut chain = TransformChain::new();
        if config.normalize {
            chain.push(Arc::new(NormalizeStage::new()));
        }
        if config.case_fold {
            chain.push(Arc::new(CaseFoldStage::new()));
        }
        if let Some(name) = &config.stemmer {
            chain.push(Arc::from(stem::select(name, &config.stemmer_config)?));
        }

        Ok(Pipeline { bundle, chain })
    }

    /// The resolved capability bundle.
    pub fn bundle(&self) -> &CapabilityBundle {
        &self.bundle
    }

    /// The configured transformation chain.
    pub fn chain(&self) -> &TransformChain {
        &self.chain
    }

    /// Run one raw document through tokenizer, parser, and chain.
    pub fn transform(&self, raw: RawDocument) -> Result<ParsedDocument> {
        let tokenized = self.bundle.tokenizer.tokenize(raw)?;
        log::debug!(
            "tokenized: text={}B content={}B terms={}",
            tokenized.text_len(),
            tokenized.content_len(),
            tokenized.terms.len()
        );
        log::debug!("text: {}", String::from_utf8_lossy(tokenized.text_bytes()));
        log::debug!(
            "content: {}",
            String::from_utf8_lossy(tokenized.content_bytes())
        );
        debug_assert!(tokenized.terms_within_content());

        let parsed = self.bundle.parser.parse(tokenized)?;
        log::debug!(
            "parsed {}: terms={} positions={}",
            parsed.docno,
            parsed.terms.len(),
            parsed.positions.len()
        );

        let transformed = self.chain.apply(parsed)?;
        debug_assert!(transformed.is_aligned());
        Ok(transformed)
    }

    /// Open a file and stream its documents through the pipeline.
    pub fn open(&self, path: &Path) -> Result<DocumentStream<'_>> {
        let documents = self.bundle.iterator.open(path)?;
        Ok(DocumentStream {
            pipeline: self,
            documents,
            stats: StreamStats::default(),
            done: false,
        })
    }
}

/// Lazy stream of transformed documents from one open file.
///
/// Recoverable errors are yielded inline and counted as skips; the
/// caller continues iterating past them. A fatal error (or end of
/// stream) fuses the stream.
pub struct DocumentStream<'a> {
    pipeline: &'a Pipeline,
    documents: Box<dyn DocumentIterator>,
    stats: StreamStats,
    done: bool,
}

impl std::fmt::Debug for DocumentStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStream")
            .field("stats", &self.stats)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl DocumentStream<'_> {
    /// Counters observed so far.
    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    fn note_failure(&mut self, error: SickleError) -> Option<Result<ParsedDocument>> {
        if error.is_recoverable() {
            self.stats.skipped += 1;
            log::warn!("skipping document: {error}");
        } else {
            self.done = true;
        }
        Some(Err(error))
    }
}

impl Iterator for DocumentStream<'_> {
    type Item = Result<ParsedDocument>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.documents.next_document() {
            Ok(Some(raw)) => match self.pipeline.transform(raw) {
                Ok(doc) => {
                    self.stats.emitted += 1;
                    Some(Ok(doc))
                }
                Err(error) => self.note_failure(error),
            },
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => self.note_failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_format_label_is_configuration_error() {
        let registry = FormatRegistry::builtin().unwrap();
        let err = Pipeline::new(&PipelineConfig::new("  "), &registry).unwrap_err();
        assert!(matches!(err, SickleError::Configuration(_)));
    }

    #[test]
    fn test_unknown_format_fails_at_construction() {
        let registry = FormatRegistry::builtin().unwrap();
        let err = Pipeline::new(&PipelineConfig::new("unknown-format"), &registry).unwrap_err();
        assert!(matches!(err, SickleError::UnknownFormat(_)));
    }

    #[test]
    fn test_unsupported_stemmer_fails_at_construction() {
        let registry = FormatRegistry::builtin().unwrap();
        let config = PipelineConfig::new("trec-text").with_stemmer("foo");
        let err = Pipeline::new(&config, &registry).unwrap_err();
        assert!(matches!(err, SickleError::UnsupportedStemmer(_)));
    }

    #[test]
    fn test_default_chain_order() {
        let registry = FormatRegistry::builtin().unwrap();
        let config = PipelineConfig::new("trec-text").with_stemmer("porter");
        let pipeline = Pipeline::new(&config, &registry).unwrap();
        assert_eq!(
            pipeline.chain().stage_names(),
            vec!["normalize", "case-fold", "stem"]
        );
    }

    #[test]
    fn test_stages_disabled_individually() {
        let registry = FormatRegistry::builtin().unwrap();
        let config = PipelineConfig::new("trec-text")
            .normalize(false)
            .case_fold(false);
        let pipeline = Pipeline::new(&config, &registry).unwrap();
        assert!(pipeline.chain().is_empty());
    }

    #[test]
    fn test_transform_single_document() {
        let registry = FormatRegistry::builtin().unwrap();
        let pipeline = Pipeline::new(&PipelineConfig::new("trec-text"), &registry).unwrap();

        let raw = RawDocument::new(
            b"<DOC>\n<DOCNO>A-1</DOCNO>\n<TEXT>Hello U.S.A. hello</TEXT>\n</DOC>\n".to_vec(),
        );
        let doc = pipeline.transform(raw).unwrap();
        assert_eq!(doc.docno, "A-1");
        assert_eq!(doc.terms, vec!["hello", "usa", "hello"]);
        assert_eq!(doc.positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"format": "trec-text"}"#).unwrap();
        assert!(config.normalize);
        assert!(config.case_fold);
        assert!(config.stemmer.is_none());
    }
}
