//! Stemming stage and stemmer implementations.

use serde::{Deserialize, Serialize};

use crate::document::ParsedDocument;
use crate::error::{Result, SickleError};
use crate::transform::TransformationStage;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Per-run stemmer configuration, fixed at construction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StemmerConfig {
    /// Terms shorter than this many characters pass through unstemmed.
    pub min_term_length: usize,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        StemmerConfig { min_term_length: 3 }
    }
}

// Stemmer implementations
pub mod krovetz;
pub mod porter;

// Re-export stemmers
pub use krovetz::KrovetzStemmer;
pub use porter::PorterStemmer;

/// The closed set of selectable stemmer names.
pub const SUPPORTED_STEMMERS: &[&str] = &["krovetz", "porter"];

/// Select a stemming stage by algorithm name.
///
/// The name set is closed: anything outside [`SUPPORTED_STEMMERS`] is an
/// [`UnsupportedStemmer`](SickleError::UnsupportedStemmer) error, never a
/// silent fallback. Selection happens at pipeline construction, before
/// any document is read.
pub fn select(name: &str, config: &StemmerConfig) -> Result<Box<dyn TransformationStage>> {
    match name {
        "krovetz" => Ok(Box::new(StemStage::krovetz(config))),
        "porter" => Ok(Box::new(StemStage::porter(config))),
        other => Err(SickleError::unsupported_stemmer(other)),
    }
}

/// Stage that applies a stemmer to every sufficiently long term.
///
/// An ordinary transformation stage with no special status in the chain;
/// it is appended like any other stage. Term count and positions are
/// never changed.
pub struct StemStage {
    stemmer: Box<dyn Stemmer>,
    min_term_length: usize,
}

impl std::fmt::Debug for StemStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemStage")
            .field("stemmer", &self.stemmer.name())
            .field("min_term_length", &self.min_term_length)
            .finish()
    }
}

impl StemStage {
    /// Create a stem stage with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>, config: &StemmerConfig) -> Self {
        StemStage {
            stemmer,
            min_term_length: config.min_term_length,
        }
    }

    /// Create a stage running the Porter stemmer.
    pub fn porter(config: &StemmerConfig) -> Self {
        Self::with_stemmer(Box::new(PorterStemmer::new()), config)
    }

    /// Create a stage running the Krovetz stemmer.
    pub fn krovetz(config: &StemmerConfig) -> Self {
        Self::with_stemmer(Box::new(KrovetzStemmer::new()), config)
    }
}

impl TransformationStage for StemStage {
    fn transform(&self, mut doc: ParsedDocument) -> Result<ParsedDocument> {
        for term in &mut doc.terms {
            if term.chars().count() >= self.min_term_length {
                let stemmed = self.stemmer.stem(term);
                if stemmed != *term {
                    *term = stemmed;
                }
            }
        }
        Ok(doc)
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use ahash::AHashMap;

    use crate::document::ByteSpan;

    use super::*;

    fn doc(terms: &[&str]) -> ParsedDocument {
        ParsedDocument {
            docno: "t".to_string(),
            buffer: Vec::new(),
            text: ByteSpan::default(),
            content: ByteSpan::default(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
            positions: (0..terms.len()).collect(),
            metadata: AHashMap::new(),
        }
    }

    #[test]
    fn test_stem_stage_porter() {
        let stage = StemStage::porter(&StemmerConfig::default());
        let out = stage.transform(doc(&["running", "flies", "it"])).unwrap();
        assert_eq!(out.terms, vec!["run", "fli", "it"]); // "it" is below min length
        assert!(out.is_aligned());
    }

    #[test]
    fn test_select_closed_set() {
        let config = StemmerConfig::default();
        assert_eq!(select("porter", &config).unwrap().name(), "stem");
        assert_eq!(select("krovetz", &config).unwrap().name(), "stem");

        let err = select("foo", &config).unwrap_err();
        assert!(matches!(err, SickleError::UnsupportedStemmer(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_no_silent_fallback() {
        // Even a near-miss of a supported name must be rejected.
        assert!(select("Porter", &StemmerConfig::default()).is_err());
        assert!(select("porter2", &StemmerConfig::default()).is_err());
    }

    #[test]
    fn test_min_term_length_respected() {
        let config = StemmerConfig { min_term_length: 10 };
        let stage = StemStage::porter(&config);
        let out = stage.transform(doc(&["running"])).unwrap();
        assert_eq!(out.terms, vec!["running"]);
    }
}
