use color_eyre::Result;
use thiserror::Error;

use super::snapshot::{MemoryStats, ProcessEntry};

/// Why a single process could not be read during enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessAccessError {
    #[error("process {0} exited during enumeration")]
    Exited(u32),
    #[error("access to process {0} denied")]
    AccessDenied(u32),
}

/// Source of raw host metrics.
///
/// `per_core_cpu_percent` blocks for the provider's measurement window, since
/// CPU usage is derived from the delta between two readings.
pub trait MetricsProvider {
    fn per_core_cpu_percent(&mut self) -> Result<Vec<f64>>;
    fn virtual_memory(&mut self) -> Result<MemoryStats>;
    fn swap_memory(&mut self) -> Result<MemoryStats>;
    /// Each entry fails independently; a failed entry never aborts the enumeration.
    fn enumerate_processes(&mut self) -> Result<Vec<Result<ProcessEntry, ProcessAccessError>>>;
}
