//! Output formatting and persistence for run summaries.
//!
//! Supports the plain-text report, JSON serialization, and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::stats::Summary;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Writes the plain-text report, floats to three decimal places.
pub fn write_text<W: Write>(mut out: W, summary: &Summary) -> Result<()> {
    writeln!(out, "Results:")?;
    writeln!(out, "--------")?;
    writeln!(out, "Num values: {}", summary.count)?;
    writeln!(out, "Mean: {:.3}", summary.mean)?;
    writeln!(out, "Median: {:.3}", summary.median)?;
    writeln!(out, "Mode: {:.3}", summary.mode)?;
    writeln!(out, "Standard Deviation: {:.3}", summary.std_dev)?;
    writeln!(out, "Harmonic Mean: {:.3}", summary.harmonic_mean)?;
    writeln!(out, "Unused array capacity: {}", summary.unused_capacity)?;
    Ok(())
}

/// Writes the summary as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut out: W, summary: &Summary) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, summary)?;
    writeln!(out)?;
    Ok(())
}

/// One line of CSV history: a summary stamped with when and where it came
/// from.
#[derive(Debug, Serialize)]
pub struct SummaryRow<'a> {
    pub timestamp: DateTime<Utc>,
    pub source: &'a str,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub std_dev: f64,
    pub harmonic_mean: f64,
    pub unused_capacity: usize,
}

impl<'a> SummaryRow<'a> {
    pub fn new(source: &'a str, summary: &Summary) -> Self {
        SummaryRow {
            timestamp: Utc::now(),
            source,
            count: summary.count,
            mean: summary.mean,
            median: summary.median,
            mode: summary.mode,
            std_dev: summary.std_dev,
            harmonic_mean: summary.harmonic_mean,
            unused_capacity: summary.unused_capacity,
        }
    }
}

/// Appends a [`SummaryRow`] to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, row: &SummaryRow<'_>) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(row)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_summary() -> Summary {
        Summary {
            count: 5,
            mean: 2.4,
            median: 2.0,
            mode: 2.0,
            std_dev: 1.0198039,
            harmonic_mean: 1.9354839,
            unused_capacity: 15,
        }
    }

    #[test]
    fn test_write_text_layout() {
        let mut out = Vec::new();
        write_text(&mut out, &sample_summary()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected = "Results:\n\
                        --------\n\
                        Num values: 5\n\
                        Mean: 2.400\n\
                        Median: 2.000\n\
                        Mode: 2.000\n\
                        Standard Deviation: 1.020\n\
                        Harmonic Mean: 1.935\n\
                        Unused array capacity: 15\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_json_round_values() {
        let mut out = Vec::new();
        write_json(&mut out, &sample_summary()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["count"], 5);
        assert_eq!(value["mean"], 2.4);
        assert_eq!(value["unused_capacity"], 15);
    }

    #[test]
    fn test_append_record_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let path = path.to_str().unwrap();

        let summary = sample_summary();
        append_record(path, &SummaryRow::new("data.txt", &summary)).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("timestamp,source,count,"));
        assert!(content.contains("data.txt"));
    }

    #[test]
    fn test_append_record_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let path = path.to_str().unwrap();

        let summary = sample_summary();
        append_record(path, &SummaryRow::new("a.txt", &summary)).unwrap();
        append_record(path, &SummaryRow::new("b.txt", &summary)).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        let header_count = lines.iter().filter(|l| l.contains("timestamp")).count();
        assert_eq!(header_count, 1);
    }
}
