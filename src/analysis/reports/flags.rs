//! Flag statistics report formatter

use super::utils::{export_json, format_number};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::FlagStatistics;

/// Format the whole-table flag statistics
pub fn format_flag_statistics(flags: &FlagStatistics, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(flags),
        OutputFormat::Console => {
            let mut output = String::new();

            output.push_str("=== OVERALL TABLE STATISTICS ===\n\n");
            output.push_str(&format!(
                "Total tweets in table: {}\n",
                format_number(flags.total_tweets)
            ));

            output.push_str("\nis_reply statistics:\n");
            output.push_str(&format!("  is_reply = 0: {}\n", format_number(flags.is_reply_0)));
            output.push_str(&format!("  is_reply = 1: {}\n", format_number(flags.is_reply_1)));

            output.push_str("\nis_grok_reply statistics:\n");
            output.push_str(&format!(
                "  is_grok_reply = 0: {}\n",
                format_number(flags.is_grok_reply_0)
            ));
            output.push_str(&format!(
                "  is_grok_reply = 1: {}\n",
                format_number(flags.is_grok_reply_1)
            ));

            output.push_str("\nCombined statistics (is_reply, is_grok_reply):\n");
            for (label, count) in [
                ("(0, 0)", flags.combo_0_0),
                ("(0, 1)", flags.combo_0_1),
                ("(1, 0)", flags.combo_1_0),
                ("(1, 1)", flags.combo_1_1),
            ] {
                output.push_str(&format!("  {}: {}\n", label, format_number(count)));
            }

            output.push_str("\nparent_id statistics:\n");
            output.push_str(&format!(
                "  parent_id is NULL or empty: {}\n",
                format_number(flags.parent_id_null)
            ));
            output.push_str(&format!(
                "  parent_id is NOT NULL: {}\n",
                format_number(flags.parent_id_not_null)
            ));

            let violations = flags.invariant_violations();
            if !violations.is_empty() {
                output.push_str("\nWarnings:\n");
                for violation in violations {
                    output.push_str(&format!("  {}\n", violation));
                }
            }

            Ok(output)
        }
    }
}
