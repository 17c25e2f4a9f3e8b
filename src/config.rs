use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub output: OutputConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

/// Destinations for the CSV extracts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub author_csv: String,
    pub engagement_csv: String,
}

impl OutputConfig {
    pub fn author_csv_path(&self) -> PathBuf {
        self.directory.join(&self.author_csv)
    }

    pub fn engagement_csv_path(&self) -> PathBuf {
        self.directory.join(&self.engagement_csv)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Author name (case-insensitive) whose tweets form the distinguished category
    pub distinguished_author: String,
    pub progress_interval: usize,
}

pub const DEFAULT_DATABASE_PATH: &str = "grok.sqlite3";
pub const DEFAULT_AUTHOR_CSV: &str = "author_tweet_stats.csv";
pub const DEFAULT_ENGAGEMENT_CSV: &str = "engagement_metrics_distribution.csv";
pub const DEFAULT_DISTINGUISHED_AUTHOR: &str = "grok";
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: PathBuf::from(DEFAULT_DATABASE_PATH),
            },
            output: OutputConfig {
                directory: PathBuf::from("."),
                author_csv: DEFAULT_AUTHOR_CSV.to_string(),
                engagement_csv: DEFAULT_ENGAGEMENT_CSV.to_string(),
            },
            analysis: AnalysisConfig {
                distinguished_author: DEFAULT_DISTINGUISHED_AUTHOR.to_string(),
                progress_interval: DEFAULT_PROGRESS_INTERVAL,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration using `file_stem` as the optional config file
    /// (any extension the `config` crate understands, e.g. `config.toml`)
    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("database.path", DEFAULT_DATABASE_PATH)?
            .set_default("output.directory", ".")?
            .set_default("output.author_csv", DEFAULT_AUTHOR_CSV)?
            .set_default("output.engagement_csv", DEFAULT_ENGAGEMENT_CSV)?
            .set_default("analysis.distinguished_author", DEFAULT_DISTINGUISHED_AUTHOR)?
            .set_default(
                "analysis.progress_interval",
                DEFAULT_PROGRESS_INTERVAL as i64,
            )?
            .add_source(File::with_name(file_stem).required(false))
            // TWEETS__ANALYSIS__PROGRESS_INTERVAL style overrides
            .add_source(config::Environment::with_prefix("TWEETS").separator("__"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(db_path) = env::var("TWEETS_DATABASE_PATH") {
            app_config.database.path = PathBuf::from(db_path);
        }

        if let Ok(output_dir) = env::var("TWEETS_OUTPUT_DIR") {
            app_config.output.directory = PathBuf::from(output_dir);
        }

        if let Ok(author) = env::var("TWEETS_DISTINGUISHED_AUTHOR") {
            app_config.analysis.distinguished_author = author;
        }

        if app_config.analysis.progress_interval == 0 {
            return Err(ConfigError::Message(
                "analysis.progress_interval must be greater than zero".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// Get config values for CLI argument defaults, falling back to built-in
    /// defaults when the file or environment is unusable
    pub fn get_defaults() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
