//! Tabsum CLI - descriptive statistics for delimited data files.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { file, output, json } => {
            commands::analyze::run(file, output, json, cli.verbose)
        }

        Commands::Serve {
            port,
            max_upload_mb,
            allow_origin,
        } => commands::serve::run(port, max_upload_mb, allow_origin),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
