//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tabsum: descriptive statistics for delimited data files
#[derive(Parser)]
#[command(name = "tabsum")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a data file and write the JSON report
    Analyze {
        /// Path to the data file (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the report (default: <file>.analysis.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the report to stdout instead of writing a file
        #[arg(long)]
        json: bool,
    },

    /// Run the upload analysis server
    Serve {
        /// Port for the web server
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Maximum accepted upload size in megabytes
        #[arg(long, default_value = "16")]
        max_upload_mb: usize,

        /// Allowed CORS origin (repeatable; default: any origin)
        #[arg(long)]
        allow_origin: Vec<String>,
    },
}
