//! Command-line interface definition.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{config::Processes, table::DEFAULT_MODEL};

/// A parallel tandem repeat unit standardizer for DNA repeat alignments.
#[derive(Parser, Debug)]
#[command(name = "trunit")]
#[command(version, author, about, long_about = None)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The pipeline stages exposed as subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive consensus and canonical units for stored repeat lists
    Annotate {
        /// Directory of repeat list JSON files from the detector
        input_dir: PathBuf,

        /// Directory for annotated lists; sequences already present are skipped
        output_dir: PathBuf,

        /// Worker threads to run in parallel; -1 uses all available CPUs
        #[arg(
            short,
            long,
            default_value = "1",
            allow_negative_numbers = true,
            value_parser = parse_processes
        )]
        processes: Processes,
    },

    /// Assemble annotated repeats into one delimited table
    Export {
        /// Directory of repeat list JSON files
        repeat_dir: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: OutputFormat,

        /// Statistical model whose scores fill the score columns
        #[arg(short, long, default_value = DEFAULT_MODEL)]
        model: String,
    },

    /// Rewrite a FASTA file with '/' in record ids replaced by '-'
    Reformat {
        /// Input FASTA file
        input: PathBuf,

        /// Output FASTA file
        output: PathBuf,
    },
}

/// Output format for the repeat table.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated values
    #[default]
    Tsv,
    /// Comma-separated values
    Csv,
    /// JSON array format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tsv => write!(f, "tsv"),
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

fn parse_processes(s: &str) -> Result<Processes, String> {
    let requested: i64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    Processes::from_flag(requested).map_err(|err| err.to_string())
}
