//! Data types flowing from the sampler to the formatter.
//! Keep this module minimal and stable: the formatter's layout depends on it.

use chrono::NaiveDateTime;

use crate::error::MonitorError;

/// One instantaneous reading of host metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub cpu_percent: f32,
    pub mem_used_bytes: u64,
    pub mem_total_bytes: u64,
    pub mem_percent: f32,
}

impl Sample {
    /// Reject readings the formatter cannot render meaningfully.
    pub fn validate(&self) -> Result<(), MonitorError> {
        if !self.cpu_percent.is_finite() {
            return Err(MonitorError::Formatting(format!(
                "cpu percent is not finite: {}",
                self.cpu_percent
            )));
        }
        if !self.mem_percent.is_finite() {
            return Err(MonitorError::Formatting(format!(
                "memory percent is not finite: {}",
                self.mem_percent
            )));
        }
        if self.mem_used_bytes > self.mem_total_bytes {
            return Err(MonitorError::Formatting(format!(
                "used memory {} exceeds total {}",
                self.mem_used_bytes, self.mem_total_bytes
            )));
        }
        Ok(())
    }
}
