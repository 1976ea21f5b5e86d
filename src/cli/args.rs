//! Command line argument parsing for Sickle using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Sickle - a document normalization pipeline
#[derive(Parser, Debug, Clone)]
#[command(name = "sickle")]
#[command(about = "A document normalization pipeline for text-retrieval indexing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Sickle Contributors")]
#[command(long_about = None)]
pub struct SickleArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output rendering
    #[arg(short = 'o', long = "output", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SickleArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Whether the explicit per-document debug dump was requested.
    pub fn debug_requested(&self) -> bool {
        match &self.command {
            Command::Transform(transform_args) => transform_args.debug,
            _ => false,
        }
    }
}

/// Output rendering formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Normalize the documents in a file into term sequences
    Transform(TransformArgs),

    /// List the registered format labels
    Formats,

    /// List the supported stemmer names
    Stemmers,
}

/// Arguments for the transform command
#[derive(Parser, Debug, Clone)]
pub struct TransformArgs {
    /// Path to the document file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Format label of the file (see `sickle formats`)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: String,

    /// Stemmer to append to the chain (see `sickle stemmers`)
    #[arg(short, long, value_name = "STEMMER")]
    pub stemmer: Option<String>,

    /// Dump intermediate tokenized/parsed state per document
    #[arg(long)]
    pub debug: bool,

    /// Skip the term-normalization stage
    #[arg(long)]
    pub no_normalize: bool,

    /// Skip the case-folding stage
    #[arg(long)]
    pub no_case_fold: bool,

    /// Abort once more than this many documents were skipped
    #[arg(long, value_name = "N")]
    pub max_skips: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_defaults() {
        let args = SickleArgs::parse_from(["sickle", "formats"]);
        assert_eq!(args.verbosity(), 1);

        let args = SickleArgs::parse_from(["sickle", "-q", "formats"]);
        assert_eq!(args.verbosity(), 0);

        let args = SickleArgs::parse_from(["sickle", "-vv", "formats"]);
        assert_eq!(args.verbosity(), 2);
    }

    #[test]
    fn test_transform_args() {
        let args = SickleArgs::parse_from([
            "sickle",
            "transform",
            "--format",
            "trec-text",
            "--stemmer",
            "porter",
            "--debug",
            "input.trec",
        ]);
        assert!(args.debug_requested());
        match args.command {
            Command::Transform(t) => {
                assert_eq!(t.format, "trec-text");
                assert_eq!(t.stemmer.as_deref(), Some("porter"));
                assert_eq!(t.file, PathBuf::from("input.trec"));
                assert!(!t.no_case_fold);
            }
            _ => panic!("expected transform command"),
        }
    }

    #[test]
    fn test_debug_is_an_explicit_flag() {
        // Absent flag means off; there is no truthy/falsy value form.
        let args = SickleArgs::parse_from([
            "sickle", "transform", "--format", "trec-text", "input.trec",
        ]);
        assert!(!args.debug_requested());
    }
}
