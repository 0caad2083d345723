//! Analyze command - analyze a data file and write the report.

use std::path::PathBuf;

use colored::Colorize;
use tabsum::{Analyzer, Dtype};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let analyzer = Analyzer::new();
    let result = analyzer.analyze_file(&file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Analyzed".cyan().bold(),
        file.display().to_string().white()
    );
    println!(
        "{} rows, {} columns ({} numeric)",
        result.rows.to_string().white().bold(),
        result.cols.to_string().white().bold(),
        result.numeric_columns.len().to_string().white().bold()
    );

    if verbose {
        println!();
        println!("{}", "Columns:".yellow().bold());
        for col in &result.columns {
            let dtype = match col.dtype {
                Dtype::Numeric => "numeric".green(),
                Dtype::Text => "text".blue(),
            };
            println!("  {:24} {}", col.name, dtype);
        }
    }

    if !result.stats.is_empty() {
        println!();
        println!("{}", "Statistics:".yellow().bold());
        for (name, stats) in &result.stats {
            println!(
                "  {:24} count={} min={} max={} mean={} sum={}",
                name,
                stats.count,
                format_stat(stats.min),
                format_stat(stats.max),
                format_stat(stats.mean),
                format_stat(stats.sum),
            );
        }
    }

    let output_path = output.unwrap_or_else(|| {
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        file.with_file_name(format!("{}.analysis.json", stem))
    });

    std::fs::write(&output_path, serde_json::to_string_pretty(&result)?)?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "null".to_string(),
    }
}
