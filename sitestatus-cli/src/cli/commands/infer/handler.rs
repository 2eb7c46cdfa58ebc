//! Infer command handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::*;
use serde_json::json;

use super::InferCommands;
use crate::config::{Config, OutputFormat};
use crate::header::error::HeaderError;
use crate::header::{HeaderMap, Period, infer_header};
use crate::workbook::read_header_row;

/// Inference result for one file
#[derive(Debug)]
struct FileReport {
    file: PathBuf,
    period: Period,
    columns: HeaderMap,
}

/// Handle the infer command
pub fn handle_infer_command(args: InferCommands, config: &Config) -> Result<()> {
    let period = args.period().unwrap_or(config.period);
    let format = args.format.unwrap_or(config.format);
    log::info!("Inferring headers for {} file(s) using {}", args.files.len(), period);

    let (reports, failures) = collect_reports(&args.files, period);

    match format {
        OutputFormat::Json => {
            let json: Vec<_> = reports
                .iter()
                .map(|report| {
                    json!({
                        "file": report.file,
                        "period": report.period,
                        "columns": report.columns.to_map(),
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&json)
                .context("Failed to serialize header maps")?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            for report in &reports {
                print_table(report);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} file(s) failed", failures, args.files.len());
    }

    Ok(())
}

/// Infer every file, reporting failures without stopping at them
fn collect_reports(files: &[PathBuf], period: Period) -> (Vec<FileReport>, usize) {
    let mut reports = Vec::new();
    let mut failures = 0usize;

    for file in files {
        match infer_file(file, period) {
            Ok(columns) => reports.push(FileReport {
                file: file.clone(),
                period,
                columns,
            }),
            Err(e) => {
                failures += 1;
                if let Some(header_err) = e.downcast_ref::<HeaderError>() {
                    log::debug!(
                        "{}: failed at {} checkpoint",
                        file.display(),
                        header_err.checkpoint()
                    );
                }
                eprintln!("{} {}: {:#}", "✗".red().bold(), file.display(), e);
            }
        }
    }

    (reports, failures)
}

/// Load a spreadsheet and infer its header map
pub fn infer_file(path: &Path, period: Period) -> Result<HeaderMap> {
    let row = read_header_row(path)?;
    let columns = infer_header(&row, period)
        .with_context(|| format!("Unexpected header layout in {}", path.display()))?;
    Ok(columns)
}

fn print_table(report: &FileReport) {
    println!(
        "{} {} ({})",
        "✓".green().bold(),
        report.file.display().to_string().bold(),
        report.period.to_string().cyan()
    );
    for (field, column) in report.columns.entries() {
        println!("  {:<24} {}", field, column.yellow());
    }
    println!();
}
