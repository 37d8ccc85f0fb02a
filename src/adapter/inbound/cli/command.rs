//! Command-line interface definitions.
//!
//! Defines the CLI structure for vault-quote-sync using `clap`. The binary
//! processes a single queue message locally or validates configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Loan quote generation for Vault Spark messages
#[derive(Parser, Debug)]
#[command(name = "vault-quote-sync")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level implied by `-v` / `-q`, if either was given.
    #[must_use]
    pub fn log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("warn");
        }
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process one queue message and print the response envelope
    Handle(HandleArgs),

    /// Validate the configuration file and environment
    Check(ConfigPathArg),
}

/// Arguments for the `handle` subcommand.
#[derive(Parser, Debug)]
pub struct HandleArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Message file to process (reads stdin when omitted).
    #[arg(short, long)]
    pub message: Option<PathBuf>,
}

/// Config file path argument shared by commands.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}
