use std::cmp::Ordering;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use super::provider::MetricsProvider;
use super::snapshot::{ProcessEntry, SystemSnapshot};

pub const DEFAULT_PROCESS_LIMIT: usize = 10;

pub struct Sampler<P> {
    provider: P,
    process_limit: usize,
}

impl<P: MetricsProvider> Sampler<P> {
    pub fn new(provider: P) -> Self {
        Self::with_process_limit(provider, DEFAULT_PROCESS_LIMIT)
    }

    pub fn with_process_limit(provider: P, process_limit: usize) -> Self {
        Sampler {
            provider,
            process_limit: process_limit.max(1),
        }
    }

    pub fn process_limit(&self) -> usize {
        self.process_limit
    }

    /// Takes one snapshot. Blocks for the provider's CPU measurement window.
    pub fn sample(&mut self) -> Result<SystemSnapshot> {
        let _span = tracing::debug_span!("sampler.sample").entered();

        let cpu_percent = self
            .provider
            .per_core_cpu_percent()
            .wrap_err("failed to read per-core CPU usage")?;
        let memory = self
            .provider
            .virtual_memory()
            .wrap_err("failed to read virtual memory")?;
        let swap = self
            .provider
            .swap_memory()
            .wrap_err("failed to read swap memory")?;
        let enumerated = self
            .provider
            .enumerate_processes()
            .wrap_err("failed to enumerate processes")?;

        let seen = enumerated.len();
        let processes: Vec<ProcessEntry> = enumerated.into_iter().filter_map(Result::ok).collect();
        let dropped = seen - processes.len();
        let processes = top_by_cpu(processes, self.process_limit);

        tracing::debug!(
            cores = cpu_percent.len(),
            processes = processes.len(),
            dropped,
            "sampled system"
        );

        Ok(SystemSnapshot {
            cpu_percent,
            memory,
            swap,
            processes,
        })
    }
}

/// Stable sort by descending CPU usage, then keep the first `limit` entries.
pub fn top_by_cpu(mut processes: Vec<ProcessEntry>, limit: usize) -> Vec<ProcessEntry> {
    processes.sort_by(|a, b| {
        b.cpu_percent
            .partial_cmp(&a.cpu_percent)
            .unwrap_or(Ordering::Equal)
    });
    processes.truncate(limit);
    processes
}
