#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

/// Logs process resource usage per sync phase when enabled.
#[cfg(feature = "cli")]
pub struct SyncMonitor {
    system: System,
    pid: Option<Pid>,
    started: Instant,
    peak_memory_mb: u64,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SyncMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_all();
        system.refresh_all();

        Self {
            system,
            pid: sysinfo::get_current_pid().ok(),
            started: Instant::now(),
            peak_memory_mb: 0,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn log_phase(&mut self, phase: &str) {
        if !self.enabled {
            return;
        }

        self.system.refresh_all();
        let Some(process) = self.pid.and_then(|pid| self.system.process(pid)) else {
            return;
        };

        let memory_mb = process.memory() / 1024 / 1024;
        if memory_mb > self.peak_memory_mb {
            self.peak_memory_mb = memory_mb;
        }

        tracing::info!(
            "📊 {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Time: {:?}",
            phase,
            process.cpu_usage(),
            memory_mb,
            self.peak_memory_mb,
            self.started.elapsed()
        );
    }

    pub fn log_final(&mut self) {
        if !self.enabled {
            return;
        }
        tracing::info!(
            "📊 Sync finished - Total Time: {:?}, Peak Memory: {}MB",
            self.started.elapsed(),
            self.peak_memory_mb
        );
    }
}

// No-op implementation when built without the CLI feature
#[cfg(not(feature = "cli"))]
pub struct SyncMonitor;

#[cfg(not(feature = "cli"))]
impl SyncMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn is_enabled(&self) -> bool {
        false
    }

    pub fn log_phase(&mut self, _phase: &str) {}

    pub fn log_final(&mut self) {}
}
