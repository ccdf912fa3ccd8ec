use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Source request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Source access failed (HTTP {status}): {message}")]
    SourceAccessError { status: u16, message: String },

    #[error("Source returned no grid data")]
    NoDataError,

    #[error("Grid has {rows} row(s); at least a header row and one restriction row are required")]
    InsufficientDataError { rows: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Source,
    Data,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SyncError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::ApiError(_) => ErrorCategory::Network,
            SyncError::SourceAccessError { .. } => ErrorCategory::Source,
            SyncError::NoDataError | SyncError::InsufficientDataError { .. } => ErrorCategory::Data,
            SyncError::ConfigError { .. }
            | SyncError::InvalidConfigValueError { .. }
            | SyncError::MissingConfigError { .. } => ErrorCategory::Config,
            SyncError::IoError(_) | SyncError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // Network/source failures are transient; the next run may succeed unchanged
            ErrorCategory::Network | ErrorCategory::Source => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SyncError::ApiError(_) => {
                "Check network connectivity and the source URL, then re-run the sync".to_string()
            }
            SyncError::SourceAccessError { status, .. } => match status {
                401 | 403 => {
                    "Check the API key / sharing settings for the spreadsheet source".to_string()
                }
                429 => "The source is rate limiting requests; wait and re-run the sync".to_string(),
                _ => "Check that the source URL points to a valid sheet range".to_string(),
            },
            SyncError::NoDataError => {
                "The source returned an empty grid; check the sheet range".to_string()
            }
            SyncError::InsufficientDataError { .. } => {
                "The sheet needs a header row of names plus at least one restriction row"
                    .to_string()
            }
            SyncError::IoError(_) => "Check that the output path exists and is writable".to_string(),
            SyncError::SerializationError(_) => {
                "The roster file may be corrupt; re-run the sync to regenerate it".to_string()
            }
            SyncError::ConfigError { .. }
            | SyncError::InvalidConfigValueError { .. }
            | SyncError::MissingConfigError { .. } => {
                "Fix the configuration value and try again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SyncError::ApiError(e) => format!("Could not reach the spreadsheet source: {}", e),
            SyncError::SourceAccessError { status, message } => format!(
                "The spreadsheet source rejected the request ({}): {}",
                status, message
            ),
            SyncError::NoDataError => "The spreadsheet source returned no data".to_string(),
            SyncError::InsufficientDataError { rows } => format!(
                "Not enough spreadsheet rows to build a roster (got {}, need at least 2)",
                rows
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_access_is_distinguishable_from_parse_errors() {
        let access = SyncError::SourceAccessError {
            status: 403,
            message: "forbidden".to_string(),
        };
        let parse = SyncError::InsufficientDataError { rows: 1 };

        assert_eq!(access.category(), ErrorCategory::Source);
        assert_eq!(parse.category(), ErrorCategory::Data);
        assert_ne!(access.category(), parse.category());
    }

    #[test]
    fn test_auth_failure_suggests_credentials() {
        let err = SyncError::SourceAccessError {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert!(err.recovery_suggestion().contains("API key"));
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }
}
