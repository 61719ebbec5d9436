//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, ValueEnum};
use recase_core::KeyConvention;
use std::path::PathBuf;

/// Recase - convert JSON mapping keys between camelCase and snake_case
///
/// Reads a JSON document, rewrites every mapping key at every nesting level
/// into the requested convention, and writes the result. Values, array order,
/// and structural shape are left untouched.
#[derive(Parser, Debug)]
#[command(name = "recase", version, author, about, long_about = None)]
pub struct Cli {
    /// Target key convention
    #[arg(long = "to", value_enum, value_name = "CONVENTION")]
    pub target: Target,

    /// Input file (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Enable verbose output (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Target key conventions exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// camelCase application format
    Camel,
    /// snake_case wire format
    Snake,
}

impl From<Target> for KeyConvention {
    fn from(target: Target) -> Self {
        match target {
            Target::Camel => KeyConvention::Camel,
            Target::Snake => KeyConvention::Snake,
        }
    }
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
