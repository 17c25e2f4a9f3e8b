//! CSV extracts of the analysis results
//!
//! - author table: `author_username,tweet_count`, one row per author
//! - engagement values: `category,metric,value`, one row per
//!   (category, metric, tweet), i.e. the full exploded samples

use crate::analysis::EngagementSamples;
use crate::errors::AppResult;
use crate::types::AuthorReport;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub const AUTHOR_CSV_HEADER: [&str; 2] = ["author_username", "tweet_count"];
pub const ENGAGEMENT_CSV_HEADER: [&str; 3] = ["category", "metric", "value"];

/// Write the author table to any writer; returns the number of data rows
pub fn write_author_rows<W: Write>(writer: W, report: &AuthorReport) -> AppResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(AUTHOR_CSV_HEADER)?;

    for entry in &report.authors {
        csv_writer.write_record([entry.author_name(), entry.tweet_count.to_string().as_str()])?;
    }

    csv_writer.flush()?;
    Ok(report.authors.len())
}

/// Write every engagement value to any writer; returns the number of data rows
pub fn write_engagement_rows<W: Write>(writer: W, samples: &EngagementSamples) -> AppResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(ENGAGEMENT_CSV_HEADER)?;

    let mut rows = 0;
    for (category, metric, values) in samples.iter() {
        for value in values {
            csv_writer.write_record([
                category.label(),
                metric.field_name(),
                value.to_string().as_str(),
            ])?;
            rows += 1;
        }
    }

    csv_writer.flush()?;
    Ok(rows)
}

/// Write the author CSV file, creating parent directories as needed
pub fn export_author_csv(path: &Path, report: &AuthorReport) -> AppResult<usize> {
    let file = create_output_file(path)?;
    let rows = write_author_rows(file, report)?;
    info!("Wrote {} author rows to {}", rows, path.display());
    Ok(rows)
}

/// Write the engagement CSV file, creating parent directories as needed
pub fn export_engagement_csv(path: &Path, samples: &EngagementSamples) -> AppResult<usize> {
    let file = create_output_file(path)?;
    let rows = write_engagement_rows(file, samples)?;
    info!("Wrote {} engagement rows to {}", rows, path.display());
    Ok(rows)
}

fn create_output_file(path: &Path) -> AppResult<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(fs::File::create(path)?)
}
