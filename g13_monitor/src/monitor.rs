//! The polling loop: sample, format, publish, wait; until the shutdown future fires.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::channel::{ChannelWriter, PublishOutcome};
use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::format::{clipped_lines, format_snapshot};
use crate::sampler::MetricSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, first cycle not started yet.
    Running,
    Sampling,
    Formatting,
    Publishing,
    Waiting,
    Stopped,
}

/// Running totals, returned when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub cycles: u64,
    pub delivered: u64,
    pub absent: u64,
    pub io_failures: u64,
    pub backoffs: u64,
}

pub struct Monitor<S> {
    source: S,
    writer: ChannelWriter,
    config: MonitorConfig,
    state: LoopState,
    stats: LoopStats,
}

impl<S: MetricSource> Monitor<S> {
    pub fn new(source: S, config: MonitorConfig) -> Self {
        Self {
            source,
            writer: ChannelWriter::new(config.channel_path.clone())
                .with_write_timeout(config.interval),
            config,
            state: LoopState::Running,
            stats: LoopStats::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Run until `shutdown` completes. Shutdown is only observed while waiting
    /// between cycles; an in-flight cycle always finishes first.
    pub async fn run<F>(mut self, shutdown: F) -> LoopStats
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        info!("G13 monitor started. Press Ctrl+C to exit.");
        loop {
            let delay = self.run_cycle().await;
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = sleep(delay) => {}
            }
        }
        self.state = LoopState::Stopped;
        info!("Stopping monitor...");
        self.stats
    }

    /// One pass Sampling -> Formatting -> Publishing, ending in Waiting.
    /// Returns how long to wait before the next pass.
    pub async fn run_cycle(&mut self) -> Duration {
        self.stats.cycles += 1;
        let delay = match self.render() {
            Ok(snapshot) => {
                self.state = LoopState::Publishing;
                match self.writer.publish(&snapshot).await {
                    PublishOutcome::Delivered { .. } => self.stats.delivered += 1,
                    PublishOutcome::Absent => self.stats.absent += 1,
                    PublishOutcome::IoFailure(_) => self.stats.io_failures += 1,
                }
                self.config.interval
            }
            Err(e) => {
                warn!("Unexpected error: {e}; retrying in {:?}", self.config.backoff);
                self.stats.backoffs += 1;
                self.config.backoff
            }
        };
        self.state = LoopState::Waiting;
        delay
    }

    fn render(&mut self) -> Result<String, MonitorError> {
        self.state = LoopState::Sampling;
        let sample = self.source.sample()?;

        self.state = LoopState::Formatting;
        sample.validate()?;
        let snapshot = format_snapshot(&sample, &self.config.system_label);
        let clipped = clipped_lines(&snapshot);
        if !clipped.is_empty() {
            debug!("snapshot lines {clipped:?} exceed the LCD and will be clipped");
        }
        Ok(snapshot)
    }
}
