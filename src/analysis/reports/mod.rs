//! Report formatting and output generation
//!
//! Provides formatting for analysis results via the [`ReportFormatter`] facade.
//! Supports Console and JSON output formats.

pub mod authors;
pub mod engagement;
pub mod flags;
pub mod utils;

use crate::errors::AppResult;
use crate::types::{AuthorReport, EngagementReport, FlagStatistics};

/// Output format options for analysis reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_author_report(r: &AuthorReport, f: &OutputFormat) -> AppResult<String> {
        authors::format_author_report(r, f)
    }

    pub fn format_flag_statistics(r: &FlagStatistics, f: &OutputFormat) -> AppResult<String> {
        flags::format_flag_statistics(r, f)
    }

    pub fn format_engagement_report(r: &EngagementReport, f: &OutputFormat) -> AppResult<String> {
        engagement::format_engagement_report(r, f)
    }
}
