//! Format registry: from a format label to a capability bundle.
//!
//! Each document dialect registers a [`CapabilityBundle`] under a string
//! label; the pipeline resolves the label once, at construction, before
//! any file is opened. Unknown labels are rejected eagerly.
//!
//! The registry is built at process start and has no interior
//! mutability, so a shared reference is safe for concurrent lookup from
//! any number of pipelines.

use std::sync::Arc;

use ahash::AHashMap;

use crate::error::{Result, SickleError};
use crate::iterator::{IteratorFactory, ParagraphIteratorFactory, TrecIteratorFactory};
use crate::parser::{Parser, StandardParser};
use crate::tokenizer::{PlainTokenizer, TaggedTokenizer, Tokenizer};

/// The capabilities a format contributes to the pipeline: how to cut
/// documents out of a file, how to segment one, and how to finish it.
#[derive(Clone)]
pub struct CapabilityBundle {
    /// Opens files of this format.
    pub iterator: Arc<dyn IteratorFactory>,

    /// Segments raw documents of this format.
    pub tokenizer: Arc<dyn Tokenizer>,

    /// Finishes tokenized documents of this format.
    pub parser: Arc<dyn Parser>,
}

impl std::fmt::Debug for CapabilityBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityBundle")
            .field("iterator", &self.iterator.name())
            .field("tokenizer", &self.tokenizer.name())
            .field("parser", &self.parser.name())
            .finish()
    }
}

/// Maps format labels to capability bundles.
#[derive(Clone, Debug, Default)]
pub struct FormatRegistry {
    formats: AHashMap<String, Arc<CapabilityBundle>>,
}

impl FormatRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        FormatRegistry {
            formats: AHashMap::new(),
        }
    }

    /// Create a registry with the built-in formats registered:
    /// `trec-text`, `trec-web`, and `plain-paragraph`, plus the
    /// collection-style aliases `trectext` and `trecweb`.
    pub fn builtin() -> Result<Self> {
        let mut registry = FormatRegistry::new();

        let trec_text = Arc::new(CapabilityBundle {
            iterator: Arc::new(TrecIteratorFactory::new()),
            tokenizer: Arc::new(TaggedTokenizer::trec_text()?),
            parser: Arc::new(StandardParser::new()),
        });
        registry.register_bundle("trec-text", Arc::clone(&trec_text));
        registry.register_bundle("trectext", trec_text);

        let trec_web = Arc::new(CapabilityBundle {
            iterator: Arc::new(TrecIteratorFactory::new()),
            tokenizer: Arc::new(TaggedTokenizer::trec_web()?),
            parser: Arc::new(StandardParser::new()),
        });
        registry.register_bundle("trec-web", Arc::clone(&trec_web));
        registry.register_bundle("trecweb", trec_web);

        registry.register_bundle(
            "plain-paragraph",
            Arc::new(CapabilityBundle {
                iterator: Arc::new(ParagraphIteratorFactory::new()),
                tokenizer: Arc::new(PlainTokenizer::new()),
                parser: Arc::new(StandardParser::new()),
            }),
        );

        Ok(registry)
    }

    /// Register a bundle under a label, replacing any previous binding.
    pub fn register_bundle<S: Into<String>>(&mut self, label: S, bundle: Arc<CapabilityBundle>) {
        self.formats.insert(label.into(), bundle);
    }

    /// Resolve a format label to its bundle.
    pub fn resolve(&self, label: &str) -> Result<Arc<CapabilityBundle>> {
        self.formats
            .get(label)
            .cloned()
            .ok_or_else(|| SickleError::unknown_format(label))
    }

    /// Registered labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.formats.keys().map(|k| k.as_str()).collect();
        labels.sort_unstable();
        labels
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}
