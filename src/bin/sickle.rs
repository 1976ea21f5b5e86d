//! Sickle CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use sickle::cli::args::*;
use sickle::cli::commands::*;

fn main() {
    // Parse command line arguments using clap
    let args = SickleArgs::parse();

    // The per-document debug dump is an explicit flag; otherwise the
    // level follows verbosity.
    let log_level = if args.debug_requested() {
        LevelFilter::Debug
    } else {
        match args.verbosity() {
            0 => LevelFilter::Error, // Quiet mode
            1 => LevelFilter::Warn,  // Default
            2 => LevelFilter::Info,  // Verbose
            _ => LevelFilter::Debug, // Very verbose (3+)
        }
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
