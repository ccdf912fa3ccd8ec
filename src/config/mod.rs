pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mealsync")]
#[command(about = "Syncs a dietary-restriction roster from a spreadsheet source")]
pub struct CliConfig {
    /// Spreadsheet values endpoint returning a JSON {"values": [[...]]} grid
    #[arg(long)]
    pub source_url: String,

    /// API key sent as the `key` query parameter when the source requires one
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = "./data")]
    pub output_path: String,

    #[arg(long, default_value = "roster.json")]
    pub roster_file: String,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log system resource usage per sync phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn roster_file(&self) -> &str {
        &self.roster_file
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source_url", &self.source_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("roster_file", &self.roster_file)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
