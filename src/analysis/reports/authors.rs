//! Author tweet count report formatter

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::AuthorReport;

/// Number of authors listed in the console table
pub const CONSOLE_TOP_AUTHORS: usize = 20;

/// Format the author report
///
/// Console output shows the totals and the busiest authors; JSON output
/// contains every author.
pub fn format_author_report(report: &AuthorReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Console => {
            let mut output = String::new();

            output.push_str("=== AUTHOR TWEET COUNTS ===\n\n");
            output.push_str(&format!(
                "Total authors: {}\n",
                format_number(report.total_authors as u64)
            ));
            output.push_str(&format!(
                "Total tweets: {}\n",
                format_number(report.total_tweets)
            ));

            if let Some(top) = report.top_author() {
                output.push_str(&format!(
                    "Top author: {} with {} tweets\n",
                    display_author(top.author.as_deref()),
                    format_number(top.tweet_count)
                ));
            }

            if !report.authors.is_empty() {
                output.push_str(&format!(
                    "\n{:<32} | {:>12}\n",
                    "Author", "Tweets"
                ));
                output.push_str(&format!("{}\n", "-".repeat(47)));
                for entry in report.authors.iter().take(CONSOLE_TOP_AUTHORS) {
                    output.push_str(&format!(
                        "{:<32} | {:>12}\n",
                        display_author(entry.author.as_deref()),
                        format_number(entry.tweet_count)
                    ));
                }
                if report.authors.len() > CONSOLE_TOP_AUTHORS {
                    output.push_str(&format!(
                        "... and {} more authors\n",
                        format_number((report.authors.len() - CONSOLE_TOP_AUTHORS) as u64)
                    ));
                }
            }

            Ok(output)
        }
    }
}

fn display_author(author: Option<&str>) -> &str {
    match author {
        Some(name) if !name.is_empty() => name,
        _ => "(unknown)",
    }
}
