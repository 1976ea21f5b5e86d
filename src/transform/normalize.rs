//! Term normalization stage.

use crate::document::ParsedDocument;
use crate::error::Result;
use crate::transform::TransformationStage;

/// Cleans term text of acronym periods and apostrophes.
///
/// Possessive `'s` endings are removed first, then every remaining
/// apostrophe and period, so `U.S.A.` becomes `usa` after case-folding
/// and `Peter's` becomes `Peter`. A term emptied by the cleanup is
/// dropped together with its position.
///
/// # Examples
///
/// ```
/// use sickle::transform::normalize::NormalizeStage;
/// use sickle::transform::TransformationStage;
///
/// let stage = NormalizeStage::new();
/// assert_eq!(stage.name(), "normalize");
/// ```
#[derive(Clone, Debug, Default)]
pub struct NormalizeStage;

impl NormalizeStage {
    /// Create a new normalization stage.
    pub fn new() -> Self {
        NormalizeStage
    }

    fn normalize_term(term: &str) -> String {
        let stripped = term
            .strip_suffix("'s")
            .or_else(|| term.strip_suffix("\u{2019}s"))
            .unwrap_or(term);
        stripped
            .chars()
            .filter(|&c| c != '\'' && c != '\u{2019}' && c != '.')
            .collect()
    }
}

impl TransformationStage for NormalizeStage {
    fn transform(&self, mut doc: ParsedDocument) -> Result<ParsedDocument> {
        for term in &mut doc.terms {
            let normalized = Self::normalize_term(term);
            if normalized != *term {
                *term = normalized;
            }
        }
        doc.retain_terms(|term| !term.is_empty());
        Ok(doc)
    }

    fn name(&self) -> &'static str {
        "normalize"
    }
}
