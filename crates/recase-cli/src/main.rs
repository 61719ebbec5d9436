//! Recase CLI - convert JSON mapping keys between camelCase and snake_case
//!
//! This is the main entry point for the recase binary. It reads a JSON
//! document from a file or stdin, runs it through the case transcoder, and
//! writes the converted document to a file or stdout.

mod cli;
mod error;

use cli::{Cli, Target};
use error::{Error, Result};
use recase_core::convert;
use serde_json::Value;
use std::io::Read;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse_args();

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: &Cli) -> Result<()> {
    let text = read_input(cli)?;

    tracing::debug!(convention = ?cli.target, bytes = text.len(), "converting document");
    let rendered = convert_document(&text, cli.target, cli.compact)?;

    write_output(cli, &rendered)
}

/// Parse a JSON document, convert its keys, and render it back to text
fn convert_document(text: &str, target: Target, compact: bool) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    let converted = convert(&value, target.into());
    let rendered = if compact {
        serde_json::to_string(&converted)?
    } else {
        serde_json::to_string_pretty(&converted)?
    };
    Ok(rendered)
}

fn read_input(cli: &Cli) -> Result<String> {
    match &cli.input {
        Some(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound { path: path.clone() });
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(cli: &Cli, rendered: &str) -> Result<()> {
    match &cli.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered))?;
            tracing::info!(path = %path.display(), "wrote converted document");
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Initialize the logging system
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed (tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
