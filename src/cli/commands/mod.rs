//! Subcommand implementations and the argument/config resolution they share

pub mod all;
pub mod authors;
pub mod engagement;
pub mod flags;

use crate::analysis::{AnalysisEngine, OutputFormat};
use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

type ConsoleFormatter<T> = fn(&T, &OutputFormat) -> AppResult<String>;

/// Flags accepted by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Database path (overrides config.toml and env vars)
    #[arg(long)]
    pub database_path: Option<PathBuf>,

    /// Directory for the CSV extracts (overrides config.toml and env vars)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format for reports
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Print reports only, do not write CSV files
    #[arg(long)]
    pub no_export: bool,
}

/// Effective settings for one invocation after CLI > env > file > defaults
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub database_path: PathBuf,
    pub author_csv: PathBuf,
    pub engagement_csv: PathBuf,
    pub distinguished_author: String,
    pub progress_interval: usize,
    pub format: OutputFormat,
    pub export: bool,
}

impl CommonArgs {
    /// Merge the CLI flags over an already loaded configuration
    pub fn resolve(&self, config: &AppConfig, distinguished_author: Option<&str>) -> RunSettings {
        let mut output = config.output.clone();
        if let Some(dir) = &self.output_dir {
            output.directory = dir.clone();
        }

        RunSettings {
            database_path: self
                .database_path
                .clone()
                .unwrap_or_else(|| config.database.path.clone()),
            author_csv: output.author_csv_path(),
            engagement_csv: output.engagement_csv_path(),
            distinguished_author: distinguished_author
                .map(str::to_string)
                .unwrap_or_else(|| config.analysis.distinguished_author.clone()),
            progress_interval: config.analysis.progress_interval,
            format: self.format,
            export: !self.no_export,
        }
    }

    /// Resolve against the layered configuration
    pub fn settings(&self, distinguished_author: Option<&str>) -> RunSettings {
        self.resolve(&AppConfig::get_defaults(), distinguished_author)
    }
}

impl RunSettings {
    /// Open the database; a missing file fails here, before any pass runs
    pub fn open_engine(&self) -> AppResult<AnalysisEngine> {
        info!("Database: {}", self.database_path.display());
        AnalysisEngine::new(&self.database_path)
    }

    /// Render a pass result in the selected format
    pub fn render<T: Serialize>(
        &self,
        report: &T,
        console: ConsoleFormatter<T>,
    ) -> AppResult<PassOutput> {
        match self.format {
            OutputFormat::Console => Ok(PassOutput::Console(console(report, &self.format)?)),
            OutputFormat::Json => Ok(PassOutput::Json(serde_json::to_value(report)?)),
        }
    }

    /// Progress and file messages; kept off stdout when it carries JSON
    pub fn status(&self, message: &str) {
        match self.format {
            OutputFormat::Console => println!("{}", message),
            OutputFormat::Json => {
                info!("{}", message);
                eprintln!("{}", message);
            }
        }
    }
}

/// Rendered result of one pass
#[derive(Debug, Clone, PartialEq)]
pub enum PassOutput {
    Console(String),
    Json(serde_json::Value),
}

impl PassOutput {
    /// Text written to stdout; JSON documents end with a newline
    pub fn to_text(&self) -> AppResult<String> {
        match self {
            PassOutput::Console(text) => Ok(text.clone()),
            PassOutput::Json(value) => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
        }
    }

    pub fn print(&self) -> AppResult<()> {
        print!("{}", self.to_text()?);
        Ok(())
    }
}
