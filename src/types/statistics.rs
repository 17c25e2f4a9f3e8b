//! Processing statistics for the record-level passes
//!
//! Tracks how many payloads decoded cleanly versus how many fell back to
//! zeros, plus timing for progress and completion reporting.

use serde::Serialize;
use std::time::{Duration, Instant};

/// Common trait for all statistics collectors
pub trait StatisticsCollector {
    /// Get the total processing duration
    fn duration(&self) -> Duration;

    /// Calculate the processing rate (items per second)
    fn processing_rate(&self) -> f64;

    /// Finalise statistics collection
    fn finish(&mut self);

    /// Get a summary of the statistics
    fn summary(&self) -> String;
}

/// Common timing information for all statistics
#[derive(Debug, Clone)]
pub struct TimingInfo {
    pub start_time: Instant,
    pub processing_duration: Duration,
}

impl Default for TimingInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingInfo {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            processing_duration: Duration::default(),
        }
    }

    pub fn finish(&mut self) {
        self.processing_duration = self.start_time.elapsed();
    }

    pub fn elapsed(&self) -> Duration {
        if self.processing_duration.is_zero() {
            self.start_time.elapsed()
        } else {
            self.processing_duration
        }
    }
}

/// Payload decoding statistics for the engagement pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseStats {
    pub total_records: usize,
    pub parsed_records: usize,
    pub malformed_records: usize,
    #[serde(skip)]
    pub timing: TimingInfo,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_parsed(&mut self) {
        self.total_records += 1;
        self.parsed_records += 1;
    }

    pub fn record_malformed(&mut self) {
        self.total_records += 1;
        self.malformed_records += 1;
    }

    pub fn error_rate(&self) -> f64 {
        crate::utils::math::safe_percentage(self.malformed_records, self.total_records)
    }
}

impl StatisticsCollector for ParseStats {
    fn duration(&self) -> Duration {
        self.timing.elapsed()
    }

    fn processing_rate(&self) -> f64 {
        let elapsed = self.timing.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_records as f64 / elapsed
        } else {
            0.0
        }
    }

    fn finish(&mut self) {
        self.timing.finish();
    }

    fn summary(&self) -> String {
        format!(
            "JSON parsing: {} successful, {} errors ({:.1}%), {:.1} records/sec",
            self.parsed_records,
            self.malformed_records,
            self.error_rate(),
            self.processing_rate()
        )
    }
}
