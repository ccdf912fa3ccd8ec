use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SyncMonitor;

/// Drives one fetch → parse → store run.
pub struct SyncEngine<P: Pipeline> {
    pipeline: P,
    monitor: SyncMonitor,
}

impl<P: Pipeline> SyncEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SyncMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&mut self) -> Result<String> {
        tracing::info!("Starting roster sync...");

        tracing::info!("Fetching sheet grid...");
        let grid = self.pipeline.fetch().await?;
        tracing::info!("Fetched {} rows", grid.len());
        self.monitor.log_phase("Fetch");

        tracing::info!("Parsing roster...");
        let roster = self.pipeline.parse(grid).await?;
        tracing::info!(
            "Parsed {} members, {} restriction items",
            roster.members.len(),
            roster.restrictions_list.len()
        );
        self.monitor.log_phase("Parse");

        tracing::info!("Storing roster...");
        let output_path = self.pipeline.store(roster).await?;
        tracing::info!("Roster saved to: {}", output_path);
        self.monitor.log_phase("Store");

        self.monitor.log_final();
        Ok(output_path)
    }
}
