//! Developer CLI for inspecting autowire analysis output.
//!
//! Reads a JSON-serialized declaration graph (as exported by a host
//! analysis engine), runs the requested pass, and prints a human-readable
//! listing. Exit codes: 0 clean, 1 error diagnostics reported, 2 the graph
//! could not be loaded.

mod report;

use autowire::prelude::*;
use clap::{Parser, Subcommand};
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use thiserror::Error as ThisError;

///
/// Cli
///

#[derive(Parser)]
#[command(
    name = "autowire",
    version = autowire::VERSION,
    about = "Service-registration metadata tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full analysis pass and print descriptors and diagnostics
    Analyze {
        /// Path to a JSON declaration graph
        graph: PathBuf,
    },

    /// Run only the structural validator and print diagnostics
    Check {
        /// Path to a JSON declaration graph
        graph: PathBuf,
    },
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error("cannot read graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot decode graph file: {0}")]
    Decode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Analyze { graph } => load_graph(&graph).map(|g| report::analyze(&g)),
        Command::Check { graph } => load_graph(&graph).map(|g| report::check(&g)),
    };

    match outcome {
        Ok(report) => {
            print!("{}", report.text);

            if report.has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("error: {err}");

            ExitCode::from(2)
        }
    }
}

fn load_graph(path: &Path) -> Result<DeclGraph, CliError> {
    let bytes = std::fs::read(path)?;
    let graph = serde_json::from_slice(&bytes)?;

    Ok(graph)
}
