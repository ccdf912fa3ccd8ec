use crate::core::summary::AggregatorConfig;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_ROSTER_FILE: &str = "roster.json";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub sync: SyncSection,
    pub source: SourceSection,
    pub roster: RosterSection,
    pub summary: Option<SummarySection>,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSection {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSection {
    pub output_path: String,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySection {
    pub priority_items: Option<Vec<String>>,
    pub bottom_items: Option<Vec<String>>,
    pub excluded_terms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SyncError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SyncError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values.
    /// Unset variables are left as-is so validation can flag them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_path("roster.output_path", &self.roster.output_path)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        // A key whose ${VAR} placeholder survived substitution means the
        // variable was never set
        if let Some(api_key) = &self.source.api_key {
            if api_key.contains("${") {
                return Err(SyncError::MissingConfigError {
                    field: format!("source.api_key ({})", api_key),
                });
            }
        }

        Ok(())
    }

    pub fn roster_file(&self) -> &str {
        self.roster.file_name.as_deref().unwrap_or(DEFAULT_ROSTER_FILE)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    /// Aggregator settings with crate defaults filled in for anything the
    /// file leaves out.
    pub fn aggregator_config(&self) -> AggregatorConfig {
        let defaults = AggregatorConfig::default();
        match &self.summary {
            Some(summary) => AggregatorConfig {
                priority_items: summary
                    .priority_items
                    .clone()
                    .unwrap_or(defaults.priority_items),
                bottom_items: summary.bottom_items.clone().unwrap_or(defaults.bottom_items),
                excluded_terms: summary.excluded_terms.clone().unwrap_or_default(),
            },
            None => defaults,
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn source_url(&self) -> &str {
        &self.source.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.source.api_key.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.roster.output_path
    }

    fn roster_file(&self) -> &str {
        self.roster_file()
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[sync]
name = "team-roster"
description = "Team dietary roster"
version = "1.0.0"

[source]
endpoint = "https://sheets.example.com/v4/spreadsheets/abc/values/A1:Z50"
timeout_seconds = 10

[roster]
output_path = "./data"
file_name = "team.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.sync.name, "team-roster");
        assert_eq!(config.roster_file(), "team.json");
        assert_eq!(config.timeout_seconds(), 10);
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MEALSYNC_TEST_KEY", "key-from-env");

        let toml_content = r#"
[sync]
name = "test"
description = "test"
version = "1.0"

[source]
endpoint = "https://sheets.example.com/values"
api_key = "${MEALSYNC_TEST_KEY}"

[roster]
output_path = "./data"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.api_key.as_deref(), Some("key-from-env"));
        assert!(config.validate().is_ok());

        std::env::remove_var("MEALSYNC_TEST_KEY");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[sync]
name = "test"
description = "test"
version = "1.0"

[source]
endpoint = "https://sheets.example.com/values"
api_key = "${MEALSYNC_UNSET_KEY}"

[roster]
output_path = "./data"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SyncError::MissingConfigError { .. }));
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let toml_content = r#"
[sync]
name = "test"
description = "test"
version = "1.0"

[source]
endpoint = "not-a-url"

[roster]
output_path = "./data"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary_section_merges_with_defaults() {
        let toml_content = r#"
[sync]
name = "test"
description = "test"
version = "1.0"

[source]
endpoint = "https://sheets.example.com/values"

[roster]
output_path = "./data"

[summary]
excluded_terms = ["attending", "approved"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let aggregator = config.aggregator_config();

        assert_eq!(aggregator.excluded_terms, vec!["attending", "approved"]);
        // Unset lists fall back to crate defaults
        assert_eq!(aggregator.priority_items, vec!["vegetarian", "vegan", "gluten"]);
        assert_eq!(aggregator.bottom_items, vec!["none"]);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[sync]
name = "file-test"
description = "File test"
version = "1.0"

[source]
endpoint = "https://sheets.example.com/values"

[roster]
output_path = "./data"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.sync.name, "file-test");
        assert_eq!(config.roster_file(), "roster.json");
    }
}
