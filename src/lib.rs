//! # Sickle
//!
//! A document normalization pipeline for text-retrieval indexing tools.
//!
//! Given a file of raw documents in one of several markup dialects,
//! Sickle produces a normalized, ordered sequence of index terms with
//! per-term positional metadata, suitable for inverted-index construction
//! or term-frequency analysis.
//!
//! ## Features
//!
//! - Format registry dispatching a label to an {iterator, tokenizer,
//!   parser} capability bundle
//! - Byte-accurate tokenization (embedded NUL bytes and arbitrary byte
//!   content never truncate a term)
//! - Ordered, composable transformation chain (normalization,
//!   case-folding, stemming)
//! - Porter and Krovetz stemmers selected by name
//! - Per-document error recovery with skip accounting
//!
//! ## Example
//!
//! ```no_run
//! use sickle::prelude::*;
//!
//! fn run() -> Result<()> {
//!     let registry = FormatRegistry::builtin()?;
//!     let config = PipelineConfig::new("trec-text").with_stemmer("porter");
//!     let pipeline = Pipeline::new(&config, &registry)?;
//!
//!     for item in pipeline.open(std::path::Path::new("docs.trec"))? {
//!         match item {
//!             Ok(doc) => println!("{}: {}", doc.docno, doc.terms.join(" ")),
//!             Err(e) if e.is_recoverable() => continue,
//!             Err(e) => return Err(e),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod document;
pub mod error;
pub mod format;
pub mod iterator;
pub mod parser;
pub mod pipeline;
pub mod tokenizer;
pub mod transform;

pub mod prelude {
    //! Convenient re-exports of the common surface.
    pub use crate::document::{ByteSpan, ParsedDocument, RawDocument, TokenizedDocument};
    pub use crate::error::{Result, SickleError};
    pub use crate::format::{CapabilityBundle, FormatRegistry};
    pub use crate::pipeline::{DocumentStream, Pipeline, PipelineConfig, StreamStats};
    pub use crate::transform::{TransformChain, TransformationStage};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
