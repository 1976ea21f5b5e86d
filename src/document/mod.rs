//! Document representations for the normalization pipeline.
//!
//! This module defines the three document shapes a document passes through
//! on its way from a file to a normalized term sequence:
//!
//! - [`RawDocument`] - one document's bytes as cut from the source file
//! - [`TokenizedDocument`] - byte-accurate text/content/term ranges
//! - [`ParsedDocument`] - materialized terms with ordinal positions
//!
//! # Buffer ownership
//!
//! A document's bytes are read exactly once. The raw document owns the
//! buffer; tokenization moves the buffer into the tokenized document and
//! describes regions of it with [`ByteSpan`] views; parsing carries the
//! buffer forward for diagnostics while decoupling the term strings from
//! it (transformation stages rewrite terms, never the buffer).
//!
//! All range operations are length-bounded. Embedded NUL bytes and
//! arbitrary non-ASCII byte sequences are ordinary content, never
//! terminators.

pub mod parsed;
pub mod raw;
pub mod span;
pub mod tokenized;

pub use parsed::ParsedDocument;
pub use raw::RawDocument;
pub use span::ByteSpan;
pub use tokenized::TokenizedDocument;
