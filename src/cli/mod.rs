//! Command-line interface for the Sickle binary.

pub mod args;
pub mod commands;
pub mod output;
