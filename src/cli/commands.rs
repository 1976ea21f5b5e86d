//! Command implementations for the Sickle CLI.

use std::time::Instant;

use crate::cli::args::{Command, OutputFormat, SickleArgs, TransformArgs};
use crate::cli::output::*;
use crate::error::Result;
use crate::format::FormatRegistry;
use crate::pipeline::{Pipeline, PipelineConfig};
use crate::transform::stem::SUPPORTED_STEMMERS;

/// Execute a CLI command.
pub fn execute_command(args: SickleArgs) -> Result<()> {
    match &args.command {
        Command::Transform(transform_args) => transform_file(transform_args.clone(), &args),
        Command::Formats => list_formats(&args),
        Command::Stemmers => list_stemmers(&args),
    }
}

/// Run a document file through the pipeline and print the term streams.
fn transform_file(args: TransformArgs, cli_args: &SickleArgs) -> Result<()> {
    let registry = FormatRegistry::builtin()?;

    let mut config = PipelineConfig::new(&args.format)
        .normalize(!args.no_normalize)
        .case_fold(!args.no_case_fold);
    if let Some(stemmer) = &args.stemmer {
        config = config.with_stemmer(stemmer);
    }
    let pipeline = Pipeline::new(&config, &registry)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Transforming {} as {} (stages: {})",
            args.file.display(),
            args.format,
            pipeline.chain().stage_names().join(", ")
        );
    }

    let start = Instant::now();
    let mut stream = pipeline.open(&args.file)?;
    let mut documents = Vec::new();

    while let Some(item) = stream.next() {
        match item {
            Ok(doc) => match cli_args.output_format {
                OutputFormat::Human => println!("{}", doc.terms.join(" ")),
                OutputFormat::Json => documents.push(DocumentTerms::from(&doc)),
            },
            Err(error) if error.is_recoverable() => {
                // Already counted and logged by the stream.
                if let Some(max_skips) = args.max_skips {
                    if stream.stats().skipped > max_skips {
                        return Err(error);
                    }
                }
            }
            Err(error) => return Err(error),
        }
    }

    let stats = stream.stats();
    let summary = TransformSummary {
        documents: stats.emitted,
        skipped: stats.skipped,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    match cli_args.output_format {
        OutputFormat::Human => {
            if cli_args.verbosity() > 1 || stats.skipped > 0 {
                eprintln!(
                    "{} documents, {} skipped in {}ms",
                    summary.documents, summary.skipped, summary.duration_ms
                );
            }
        }
        OutputFormat::Json => {
            print_json(&TransformReport { documents, summary }, cli_args)?;
        }
    }

    Ok(())
}

/// List the registered format labels.
fn list_formats(cli_args: &SickleArgs) -> Result<()> {
    let registry = FormatRegistry::builtin()?;
    let names: Vec<String> = registry.labels().iter().map(|s| s.to_string()).collect();
    print_names(names, cli_args)
}

/// List the supported stemmer names.
fn list_stemmers(cli_args: &SickleArgs) -> Result<()> {
    let names: Vec<String> = SUPPORTED_STEMMERS.iter().map(|s| s.to_string()).collect();
    print_names(names, cli_args)
}

fn print_names(names: Vec<String>, cli_args: &SickleArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Human => {
            for name in &names {
                println!("{name}");
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&NameListing { names }, cli_args),
    }
}
