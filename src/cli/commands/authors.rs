use super::{CommonArgs, PassOutput, RunSettings};
use crate::analysis::{AnalysisEngine, ReportFormatter};
use crate::errors::AppResult;
use crate::export::export_author_csv;
use clap::Args;
use tracing::info;

#[derive(Args)]
pub struct AuthorsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl AuthorsCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("=== Tweet Analyser - Authors ===");
        let settings = self.common.settings(None);
        let engine = settings.open_engine()?;
        run_pass(&engine, &settings)?.print()
    }
}

/// Author pass: write the author CSV, then render the report
pub fn run_pass(engine: &AnalysisEngine, settings: &RunSettings) -> AppResult<PassOutput> {
    let report = engine.analyse_authors()?;

    if settings.export {
        let rows = export_author_csv(&settings.author_csv, &report)?;
        settings.status(&format!(
            "Successfully saved {} authors' statistics to {}",
            rows,
            settings.author_csv.display()
        ));
    }

    settings.render(&report, ReportFormatter::format_author_report)
}
