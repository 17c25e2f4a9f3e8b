//! Reply / grok-reply / parent-id flag distribution

use crate::database::TweetQueries;
use crate::errors::AppResult;
use crate::types::FlagStatistics;
use tracing::warn;

/// Flag statistics reporter
pub struct FlagStatsAnalyser;

impl FlagStatsAnalyser {
    /// Fetch the whole-table flag counts.
    ///
    /// Counts are reported as queried; inconsistent sums are logged, not
    /// corrected.
    pub fn analyse<Q: TweetQueries>(source: &Q) -> AppResult<FlagStatistics> {
        let flags = source.flag_statistics()?;
        Self::check(&flags);
        Ok(flags)
    }

    /// Log every violated sum identity; returns whether the record is consistent
    pub fn check(flags: &FlagStatistics) -> bool {
        let violations = flags.invariant_violations();
        for violation in &violations {
            warn!("Flag statistics inconsistency: {}", violation);
        }
        violations.is_empty()
    }
}
