//! Engagement metrics report formatter
//!
//! Console output is grouped by metric, with one block per author category
//! covering the zero/non-zero split, summary statistics, percentiles and the
//! magnitude histogram.

use super::utils::{export_json, format_number, format_optional_decimal, format_optional_number};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::{AuthorCategory, EngagementReport, Metric, MetricSummary};

/// Format the engagement report
pub fn format_engagement_report(report: &EngagementReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(report),
        OutputFormat::Console => {
            let mut output = String::new();
            let stats = &report.parse_stats;

            output.push_str(&format!(
                "JSON parsing: {} successful, {} errors\n",
                format_number(stats.parsed_records as u64),
                format_number(stats.malformed_records as u64)
            ));
            output.push_str(&format!(
                "Distinguished author: {}\n",
                report.distinguished_author
            ));

            output.push_str("\n=== ENGAGEMENT METRICS DISTRIBUTION ===\n");

            for metric in Metric::ALL {
                output.push_str(&format!("\n{}:\n", metric));

                for category in AuthorCategory::ALL {
                    let summary = report
                        .distribution(category, metric)
                        .and_then(|d| d.summary.as_ref());
                    push_category_block(&mut output, category, summary);
                }
            }

            Ok(output)
        }
    }
}

fn push_category_block(
    output: &mut String,
    category: AuthorCategory,
    summary: Option<&MetricSummary>,
) {
    output.push_str(&format!(
        "  [{} ({})]\n",
        category.display_name(),
        category.label()
    ));

    let Some(summary) = summary else {
        output.push_str("    No data\n");
        return;
    };

    output.push_str(&format!(
        "    Total tweets: {}\n",
        format_number(summary.count as u64)
    ));
    output.push_str(&format!(
        "    Zero values: {} ({:.2}%)\n",
        format_number(summary.zero_count as u64),
        summary.zero_percentage
    ));
    output.push_str(&format!(
        "    Non-zero values: {} ({:.2}%)\n",
        format_number(summary.non_zero_count as u64),
        summary.non_zero_percentage
    ));

    if summary.all_zero() {
        output.push_str("    All values are zero\n");
        return;
    }

    output.push_str(&format!("    Min: {}\n", format_number(summary.min)));
    output.push_str(&format!(
        "    Min (non-zero): {}\n",
        format_optional_number(summary.non_zero_min)
    ));
    output.push_str(&format!("    Max: {}\n", format_number(summary.max)));
    output.push_str(&format!("    Mean (all): {:.2}\n", summary.mean));
    output.push_str(&format!(
        "    Mean (non-zero): {}\n",
        format_optional_decimal(summary.non_zero_mean)
    ));
    output.push_str(&format!("    Median (all): {:.2}\n", summary.median));
    output.push_str(&format!(
        "    Median (non-zero): {}\n",
        format_optional_decimal(summary.non_zero_median)
    ));

    let p = &summary.percentiles;
    for (label, value) in [
        ("25th", p.p25),
        ("50th", p.p50),
        ("75th", p.p75),
        ("90th", p.p90),
        ("95th", p.p95),
        ("99th", p.p99),
    ] {
        output.push_str(&format!(
            "    {} percentile: {}\n",
            label,
            format_number(value)
        ));
    }

    output.push_str("    Distribution buckets:\n");
    for bucket in &summary.buckets {
        output.push_str(&format!(
            "      {:<12}: {:>8} ({:5.2}%)\n",
            bucket.label,
            format_number(bucket.count as u64),
            bucket.percentage
        ));
    }
}
