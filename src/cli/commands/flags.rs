use super::{CommonArgs, PassOutput, RunSettings};
use crate::analysis::{AnalysisEngine, ReportFormatter};
use crate::errors::AppResult;
use clap::Args;
use tracing::info;

#[derive(Args)]
pub struct FlagsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl FlagsCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("=== Tweet Analyser - Flags ===");
        let settings = self.common.settings(None);
        let engine = settings.open_engine()?;
        run_pass(&engine, &settings)?.print()
    }
}

/// Flag pass: nothing is exported, the statistics are only reported
pub fn run_pass(engine: &AnalysisEngine, settings: &RunSettings) -> AppResult<PassOutput> {
    let stats = engine.analyse_flags()?;
    settings.render(&stats, ReportFormatter::format_flag_statistics)
}
