//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::SickleArgs;
use crate::document::ParsedDocument;
use crate::error::Result;

/// One document's normalized output.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentTerms {
    pub docno: String,
    pub terms: Vec<String>,
    pub positions: Vec<usize>,
}

impl From<&ParsedDocument> for DocumentTerms {
    fn from(doc: &ParsedDocument) -> Self {
        DocumentTerms {
            docno: doc.docno.clone(),
            terms: doc.terms.clone(),
            positions: doc.positions.clone(),
        }
    }
}

/// Run counters for a transform invocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransformSummary {
    pub documents: usize,
    pub skipped: usize,
    pub duration_ms: u64,
}

/// Full JSON report for a transform invocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransformReport {
    pub documents: Vec<DocumentTerms>,
    pub summary: TransformSummary,
}

/// Listing of selectable names (formats, stemmers).
#[derive(Debug, Serialize, Deserialize)]
pub struct NameListing {
    pub names: Vec<String>,
}

/// Serialize a value as JSON to stdout, honoring `--pretty`.
pub fn print_json<T: Serialize>(value: &T, cli_args: &SickleArgs) -> Result<()> {
    let rendered = if cli_args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
