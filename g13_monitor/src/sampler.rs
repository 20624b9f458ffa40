//! Host metric sampling using sysinfo.
//!
//! The sysinfo `System` handle keeps the previous CPU counters, so every call to
//! `sample()` reports usage averaged since the call before it. The first reading
//! after construction may be 0.0.

use chrono::Local;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use tracing::warn;

use crate::error::MonitorError;
use crate::types::Sample;

/// Anything that can produce one `Sample` per cycle.
pub trait MetricSource {
    fn sample(&mut self) -> Result<Sample, MonitorError>;
}

/// Memory "used" is total minus available (page cache and reclaimable buffers
/// count as free), so the GB figure can differ from tools that report `used` directly.
pub struct MetricSampler {
    sys: System,
}

impl MetricSampler {
    pub fn new() -> Self {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            warn!("sysinfo does not support this platform; readings will be empty");
        }
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());
        Self {
            sys: System::new_with_specifics(refresh_kind),
        }
    }
}

impl Default for MetricSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for MetricSampler {
    fn sample(&mut self) -> Result<Sample, MonitorError> {
        let sys = &mut self.sys;
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            sys.refresh_cpu_usage();
            sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());
        }))
        .map_err(|e| MonitorError::Sampling(format!("sysinfo refresh panicked: {e:?}")))?;

        let mem_total = sys.total_memory();
        if mem_total == 0 {
            return Err(MonitorError::Sampling("total memory reported as 0".into()));
        }
        // Used means "not available": page cache and reclaimable buffers count as free.
        let mem_used = mem_total.saturating_sub(sys.available_memory());

        Ok(Sample {
            timestamp: Local::now().naive_local(),
            cpu_percent: sys.global_cpu_usage(),
            mem_used_bytes: mem_used,
            mem_total_bytes: mem_total,
            mem_percent: (mem_used as f64 / mem_total as f64 * 100.0) as f32,
        })
    }
}
