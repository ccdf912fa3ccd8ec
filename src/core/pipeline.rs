use crate::core::parser;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::Roster;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches the spreadsheet grid over HTTP, parses it into a roster, and
/// persists the roster as JSON through the storage port.
pub struct SheetSyncPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> SheetSyncPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SheetSyncPipeline<S, C> {
    async fn fetch(&self) -> Result<Vec<Vec<String>>> {
        tracing::debug!("Requesting sheet grid from: {}", self.config.source_url());

        let mut request = self
            .client
            .get(self.config.source_url())
            .timeout(Duration::from_secs(self.config.timeout_seconds()));
        if let Some(key) = self.config.api_key() {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Source response status: {}", status);

        if !status.is_success() {
            // Auth, rate-limit and any other HTTP-level rejection; the
            // status code stays available to the caller
            let message = response.text().await.unwrap_or_default();
            return Err(SyncError::SourceAccessError {
                status: status.as_u16(),
                message: if message.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request rejected")
                        .to_string()
                } else {
                    message
                },
            });
        }

        let body: serde_json::Value = response.json().await?;
        let values = match body.get("values").and_then(|v| v.as_array()) {
            Some(values) if !values.is_empty() => values,
            _ => return Err(SyncError::NoDataError),
        };

        let grid = values
            .iter()
            .map(|row| {
                row.as_array()
                    .map(|cells| cells.iter().map(cell_to_string).collect())
                    .unwrap_or_default()
            })
            .collect();

        Ok(grid)
    }

    async fn parse(&self, grid: Vec<Vec<String>>) -> Result<Roster> {
        parser::parse(&grid)
    }

    async fn store(&self, roster: Roster) -> Result<String> {
        let json = serde_json::to_vec_pretty(&roster)?;
        tracing::debug!(
            "Writing roster ({} members, {} bytes) to storage",
            roster.members.len(),
            json.len()
        );
        self.storage
            .write_file(self.config.roster_file(), &json)
            .await?;
        Ok(format!(
            "{}/{}",
            self.config.output_path(),
            self.config.roster_file()
        ))
    }
}

fn cell_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
