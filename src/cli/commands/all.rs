use super::{authors, engagement, flags, CommonArgs, PassOutput, RunSettings};
use crate::analysis::{AnalysisEngine, OutputFormat};
use crate::errors::{AppError, AppResult};
use clap::Args;
use serde_json::{Map, Value};
use tracing::{error, info};

type PassFn = fn(&AnalysisEngine, &RunSettings) -> AppResult<PassOutput>;

/// Passes in the order the `all` command runs them
pub const PASSES: [(&str, PassFn); 3] = [
    ("authors", authors::run_pass),
    ("flags", flags::run_pass),
    ("engagement", engagement::run_pass),
];

#[derive(Args)]
pub struct AllCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Author whose tweets form the distinguished category (case-insensitive)
    #[arg(long)]
    pub distinguished_author: Option<String>,
}

impl AllCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("=== Tweet Analyser - All Passes ===");
        let settings = self
            .common
            .settings(self.distinguished_author.as_deref());
        let engine = settings.open_engine()?;
        run_all(&engine, &settings)
    }
}

/// Run every pass; a failing pass is reported and the rest still run.
///
/// Console reports are printed as each pass finishes. In JSON mode stdout
/// receives a single object keyed by pass name, `null` for failed passes.
///
/// # Errors
/// `AppError::PassesFailed` naming each failed pass, after all passes ran.
pub fn run_all(engine: &AnalysisEngine, settings: &RunSettings) -> AppResult<()> {
    let failed = match settings.format {
        OutputFormat::Console => run_console(engine, settings),
        OutputFormat::Json => {
            let (document, failed) = json_document(engine, settings);
            PassOutput::Json(Value::Object(document)).print()?;
            failed
        }
    };

    if failed.is_empty() {
        Ok(())
    } else {
        Err(AppError::PassesFailed {
            failed: failed.len(),
            attempted: PASSES.len(),
            passes: failed,
        })
    }
}

fn run_console(engine: &AnalysisEngine, settings: &RunSettings) -> Vec<String> {
    let mut failed = Vec::new();

    for (i, (name, pass)) in PASSES.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "=".repeat(60));
        }

        if let Err(e) = pass(engine, settings).and_then(|output| output.print()) {
            report_failure(name, &e);
            failed.push(name.to_string());
        }
    }

    failed
}

/// Run every pass and collect the JSON results; returns the failed pass names
pub fn json_document(
    engine: &AnalysisEngine,
    settings: &RunSettings,
) -> (Map<String, Value>, Vec<String>) {
    let mut document = Map::new();
    let mut failed = Vec::new();

    for (name, pass) in PASSES.iter() {
        let value = match pass(engine, settings) {
            Ok(PassOutput::Json(value)) => value,
            Ok(PassOutput::Console(text)) => Value::String(text),
            Err(e) => {
                report_failure(name, &e);
                failed.push(name.to_string());
                Value::Null
            }
        };
        document.insert(name.to_string(), value);
    }

    (document, failed)
}

fn report_failure(name: &str, e: &AppError) {
    error!("{} pass failed: {}", name, e);
    eprintln!("Error in {} pass: {}", name, e);
}
