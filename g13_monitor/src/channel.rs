//! Delivery of snapshots to the driver's named pipe.
//!
//! The pipe is reopened for every snapshot; the driver recreates the FIFO whenever
//! it restarts, so a writer is never kept across cycles.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::unix::pipe;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::INTERVAL;

/// Result of one publish attempt. None of these are fatal to the loop.
#[derive(Debug)]
pub enum PublishOutcome {
    Delivered { bytes: usize },
    Absent,
    IoFailure(io::Error),
}

impl PublishOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, PublishOutcome::Delivered { .. })
    }
}

pub struct ChannelWriter {
    path: PathBuf,
    write_timeout: Duration,
}

impl ChannelWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_timeout: INTERVAL,
        }
    }

    /// Upper bound on one write; a reader that stops draining the pipe costs at
    /// most this long per cycle.
    pub fn with_write_timeout(mut self, write_timeout: Duration) -> Self {
        self.write_timeout = write_timeout;
        self
    }

    /// Write `text` to the pipe in one go. Failures are logged and reported in the
    /// outcome; this never returns an error to the caller.
    pub async fn publish(&self, text: &str) -> PublishOutcome {
        if !self.path.exists() {
            warn!(
                "pipe {} not found. Is the driver running?",
                self.path.display()
            );
            return PublishOutcome::Absent;
        }
        match self.write_once(text).await {
            Ok(bytes) => {
                debug!("wrote {bytes} bytes to {}", self.path.display());
                PublishOutcome::Delivered { bytes }
            }
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                warn!("driver closed the connection");
                PublishOutcome::IoFailure(e)
            }
            Err(e) => {
                warn!("error writing to pipe {}: {e}", self.path.display());
                PublishOutcome::IoFailure(e)
            }
        }
    }

    async fn write_once(&self, text: &str) -> io::Result<usize> {
        // Non-blocking open: fails with ENXIO when no reader holds the FIFO
        // instead of parking the loop, and rejects paths that are not FIFOs.
        let mut tx = pipe::OpenOptions::new().open_sender(&self.path)?;
        timeout(self.write_timeout, tx.write_all(text.as_bytes()))
            .await
            .map_err(|_| {
                io::Error::new(io::ErrorKind::TimedOut, "reader is not draining the pipe")
            })??;
        Ok(text.len())
    }
}
