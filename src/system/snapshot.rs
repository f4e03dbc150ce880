#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryStats {
    pub total: u64,
    pub used: u64,
    pub percent: f64,
}

impl MemoryStats {
    /// Builds stats from raw byte counts; an empty pool reports 0%.
    pub fn from_bytes(total: u64, used: u64) -> Self {
        let percent = if total > 0 {
            (used as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        MemoryStats {
            total,
            used,
            percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub mem_percent: f64,
}

/// One sampled view of the host. Processes are ordered by descending CPU usage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SystemSnapshot {
    pub cpu_percent: Vec<f64>,
    pub memory: MemoryStats,
    pub swap: MemoryStats,
    pub processes: Vec<ProcessEntry>,
}
