use super::{CommonArgs, PassOutput, RunSettings};
use crate::analysis::{AnalysisEngine, ReportFormatter};
use crate::errors::AppResult;
use crate::export::export_engagement_csv;
use clap::Args;
use tracing::info;

#[derive(Args)]
pub struct EngagementCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Author whose tweets form the distinguished category (case-insensitive)
    #[arg(long)]
    pub distinguished_author: Option<String>,
}

impl EngagementCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("=== Tweet Analyser - Engagement ===");
        let settings = self
            .common
            .settings(self.distinguished_author.as_deref());
        let engine = settings.open_engine()?;
        run_pass(&engine, &settings)?.print()
    }
}

/// Engagement pass: accumulate, write the exploded values CSV, render the report
pub fn run_pass(engine: &AnalysisEngine, settings: &RunSettings) -> AppResult<PassOutput> {
    let samples =
        engine.analyse_engagement(&settings.distinguished_author, settings.progress_interval)?;
    let report = samples.report();

    if settings.export {
        info!(
            "Saving detailed statistics to {}...",
            settings.engagement_csv.display()
        );
        let rows = export_engagement_csv(&settings.engagement_csv, &samples)?;
        settings.status(&format!(
            "Successfully saved {} engagement metric values to {}",
            rows,
            settings.engagement_csv.display()
        ));
    }

    settings.render(&report, ReportFormatter::format_engagement_report)
}
