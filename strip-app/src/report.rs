//! Per-batch stripping report: console summary and optional CSV output.

use crate::error::AppError;
use colored::Colorize;
use std::fs::File;
use std::path::Path;
use strip_core::FilterOutcome;

/// Result of filtering one (shader, pass) batch.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub shader: String,
    pub pass: String,
    pub outcome: FilterOutcome,
    pub input_count: usize,
    pub retained_count: usize,
}

impl BatchReport {
    /// Variants removed from this batch.
    pub fn stripped_count(&self) -> usize {
        self.input_count - self.retained_count
    }
}

/// Aggregated report over a whole manifest run.
#[derive(Debug, Clone, Default)]
pub struct StripReport {
    pub batches: Vec<BatchReport>,
}

impl StripReport {
    pub fn push(&mut self, batch: BatchReport) {
        self.batches.push(batch);
    }

    pub fn total_input(&self) -> usize {
        self.batches.iter().map(|b| b.input_count).sum()
    }

    pub fn total_retained(&self) -> usize {
        self.batches.iter().map(|b| b.retained_count).sum()
    }

    pub fn total_stripped(&self) -> usize {
        self.total_input() - self.total_retained()
    }
}

/// Writes the per-batch report to a CSV file.
///
/// # Arguments
///
/// * `report` - The aggregated report to write.
/// * `path` - The path to the output CSV file.
pub fn write_report_csv(report: &StripReport, path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    let mut wtr = csv::Writer::from_writer(file);

    // Write header row matching console output
    wtr.write_record([
        "Shader",
        "Pass",
        "Outcome",
        "Input Variants",
        "Retained",
        "Stripped",
    ])?;

    for batch in &report.batches {
        wtr.write_record([
            batch.shader.clone(),
            batch.pass.clone(),
            batch.outcome.to_string(),
            batch.input_count.to_string(),
            batch.retained_count.to_string(),
            batch.stripped_count().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Prints the end-of-run summary to stdout.
pub fn print_summary(report: &StripReport) {
    println!("{}", "Variant stripping summary".bold());
    for batch in &report.batches {
        println!(
            "  {} / {}: {} -> {} ({})",
            batch.shader, batch.pass, batch.input_count, batch.retained_count, batch.outcome
        );
    }
    println!(
        "  {} {} of {} variants",
        "retained:".green(),
        report.total_retained(),
        report.total_input()
    );
    println!("  {} {}", "stripped:".red(), report.total_stripped());
}
