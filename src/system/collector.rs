use std::thread;
use std::time::Duration;

use color_eyre::Result;
use sysinfo::{
    MINIMUM_CPU_UPDATE_INTERVAL, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System,
};

use super::provider::{MetricsProvider, ProcessAccessError};
use super::snapshot::{MemoryStats, ProcessEntry};

pub const DEFAULT_MEASUREMENT_WINDOW: Duration = Duration::from_secs(1);

/// `MetricsProvider` backed by `sysinfo`.
///
/// CPU and process usage are both measured across the same window: the
/// per-core call takes a baseline reading, sleeps, and reads again, so
/// `enumerate_processes` reports usage over that window.
pub struct SysinfoProvider {
    sys: System,
    window: Duration,
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoProvider {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_MEASUREMENT_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_usage();
        refresh_processes(&mut sys);
        SysinfoProvider {
            sys,
            window: window.max(MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }
}

fn refresh_processes(sys: &mut System) {
    sys.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::nothing()
            .with_memory()
            .with_cpu()
            .without_tasks(),
    );
}

impl MetricsProvider for SysinfoProvider {
    fn per_core_cpu_percent(&mut self) -> Result<Vec<f64>> {
        let _span = tracing::debug_span!(
            "collector.cpu_window",
            window_ms = self.window.as_millis() as u64
        )
        .entered();

        self.sys.refresh_cpu_usage();
        refresh_processes(&mut self.sys);
        thread::sleep(self.window);
        self.sys.refresh_cpu_usage();
        refresh_processes(&mut self.sys);

        Ok(self
            .sys
            .cpus()
            .iter()
            .map(|cpu| f64::from(cpu.cpu_usage()))
            .collect())
    }

    fn virtual_memory(&mut self) -> Result<MemoryStats> {
        self.sys.refresh_memory();
        Ok(MemoryStats::from_bytes(
            self.sys.total_memory(),
            self.sys.used_memory(),
        ))
    }

    fn swap_memory(&mut self) -> Result<MemoryStats> {
        self.sys.refresh_memory();
        Ok(MemoryStats::from_bytes(
            self.sys.total_swap(),
            self.sys.used_swap(),
        ))
    }

    fn enumerate_processes(&mut self) -> Result<Vec<Result<ProcessEntry, ProcessAccessError>>> {
        let total_memory = self.sys.total_memory();

        let entries = self
            .sys
            .processes()
            .iter()
            .map(|(pid, process)| {
                let pid = pid.as_u32();
                if matches!(process.status(), ProcessStatus::Zombie | ProcessStatus::Dead) {
                    return Err(ProcessAccessError::Exited(pid));
                }

                let mem_percent = if total_memory > 0 {
                    (process.memory() as f64 / total_memory as f64 * 100.0).clamp(0.0, 100.0)
                } else {
                    0.0
                };

                Ok(ProcessEntry {
                    pid,
                    name: process.name().to_string_lossy().to_string(),
                    cpu_percent: f64::from(process.cpu_usage()).max(0.0),
                    mem_percent,
                })
            })
            .collect();

        Ok(entries)
    }
}
