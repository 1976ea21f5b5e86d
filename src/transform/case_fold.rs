//! Case-folding stage.

use crate::document::ParsedDocument;
use crate::error::Result;
use crate::transform::TransformationStage;

/// Converts every term to lowercase.
///
/// Uses Unicode-aware lowercasing, so non-ASCII letters fold correctly
/// (including multi-character expansions such as `İ`). Positions are
/// untouched; this stage never changes the number of terms.
///
/// # Examples
///
/// ```
/// use sickle::transform::case_fold::CaseFoldStage;
/// use sickle::transform::TransformationStage;
///
/// let stage = CaseFoldStage::new();
/// assert_eq!(stage.name(), "case-fold");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaseFoldStage;

impl CaseFoldStage {
    /// Create a new case-folding stage.
    pub fn new() -> Self {
        CaseFoldStage
    }
}

impl TransformationStage for CaseFoldStage {
    fn transform(&self, mut doc: ParsedDocument) -> Result<ParsedDocument> {
        for term in &mut doc.terms {
            if term.chars().any(|c| c.is_uppercase()) {
                *term = term.to_lowercase();
            }
        }
        Ok(doc)
    }

    fn name(&self) -> &'static str {
        "case-fold"
    }
}
