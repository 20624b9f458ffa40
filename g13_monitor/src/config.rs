//! Fixed runtime settings. The binary always runs with `MonitorConfig::default()`;
//! tests build their own with temp paths and short intervals.

use std::path::PathBuf;
use std::time::Duration;

/// FIFO created by the G13 driver.
pub const CHANNEL_PATH: &str = "/tmp/g13-lcd";
/// Refresh rate; one second suits the LCD.
pub const INTERVAL: Duration = Duration::from_secs(1);
/// Wait after an unexpected sampling/formatting failure.
pub const BACKOFF: Duration = Duration::from_secs(5);
pub const SYSTEM_LABEL: &str = "Arch Linux";

// G13 panel geometry as the driver lays out text: 160x48 px, text starts at
// x=2 with a 6 px glyph advance and 8 px line height.
pub const LCD_COLUMNS: usize = 26;
pub const LCD_ROWS: usize = 6;

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub channel_path: PathBuf,
    pub interval: Duration,
    pub backoff: Duration,
    pub system_label: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            channel_path: PathBuf::from(CHANNEL_PATH),
            interval: INTERVAL,
            backoff: BACKOFF,
            system_label: SYSTEM_LABEL.to_string(),
        }
    }
}
