//! Elapsed-time formatting for progress and completion logging

/// Format elapsed seconds into human-readable time (hours, minutes, seconds)
///
/// # Examples
/// ```
/// use tweet_analyser::utils::time::format_elapsed_time;
/// assert_eq!(format_elapsed_time(12.34), "12.3s");
/// assert_eq!(format_elapsed_time(75.0), "1m 15s (75.0s)");
/// ```
pub fn format_elapsed_time(elapsed_secs: f64) -> String {
    if elapsed_secs < 60.0 {
        format!("{:.1}s", elapsed_secs)
    } else if elapsed_secs < 3600.0 {
        let minutes = (elapsed_secs / 60.0).floor();
        let seconds = elapsed_secs % 60.0;
        format!("{}m {:.0}s ({:.1}s)", minutes, seconds, elapsed_secs)
    } else {
        let hours = (elapsed_secs / 3600.0).floor();
        let remaining = elapsed_secs % 3600.0;
        let minutes = (remaining / 60.0).floor();
        let seconds = remaining % 60.0;
        format!(
            "{}h {}m {:.0}s ({:.1}s)",
            hours, minutes, seconds, elapsed_secs
        )
    }
}
