//! Transformation stages applied to parsed documents.
//!
//! A stage consumes a [`ParsedDocument`] and produces a parsed document —
//! the same value rewritten, or a new one. Stages are composed into a
//! [`TransformChain`] and run strictly in configured order: the output of
//! stage *i* is the sole input of stage *i+1*. Order is significant
//! (case-folding before stemming is not the same chain as stemming before
//! case-folding) and is never rearranged.
//!
//! A stage that drops terms must drop the aligned positions with them;
//! the surviving terms keep their original position values
//! ([`ParsedDocument::retain_terms`] does both together). No stage may
//! carry mutable state between documents: per-run configuration is fixed
//! at construction, which is what makes a chain safe to reuse across
//! documents and share across threads.

use std::sync::Arc;

use crate::document::ParsedDocument;
use crate::error::Result;

/// Trait for transformation stages.
///
/// Callers must always use the returned document, never the pre-call
/// value; a stage is free to replace the document wholesale.
pub trait TransformationStage: Send + Sync {
    /// Transform the given document, consuming it.
    fn transform(&self, doc: ParsedDocument) -> Result<ParsedDocument>;

    /// Get the name of this stage (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl std::fmt::Debug for dyn TransformationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformationStage")
            .field("name", &self.name())
            .finish()
    }
}

/// An ordered chain of transformation stages.
#[derive(Clone, Default)]
pub struct TransformChain {
    stages: Vec<Arc<dyn TransformationStage>>,
}

impl std::fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformChain")
            .field("stages", &self.stage_names())
            .finish()
    }
}

impl TransformChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        TransformChain { stages: Vec::new() }
    }

    /// Append a stage to the end of the chain.
    pub fn add_stage(mut self, stage: Arc<dyn TransformationStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Append a stage in place.
    pub fn push(&mut self, stage: Arc<dyn TransformationStage>) {
        self.stages.push(stage);
    }

    /// Apply every stage in order.
    pub fn apply(&self, doc: ParsedDocument) -> Result<ParsedDocument> {
        let mut doc = doc;
        for stage in &self.stages {
            doc = stage.transform(doc)?;
        }
        Ok(doc)
    }

    /// Names of the stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the chain has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

// Individual stage modules
pub mod case_fold;
pub mod normalize;
pub mod stem;

// Re-export all stages for convenient access
pub use case_fold::CaseFoldStage;
pub use normalize::NormalizeStage;
pub use stem::{KrovetzStemmer, PorterStemmer, StemStage, Stemmer, StemmerConfig};
