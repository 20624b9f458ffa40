//! Failures the loop absorbs with a backoff instead of exiting.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("sampling failed: {0}")]
    Sampling(String),
    #[error("formatting failed: {0}")]
    Formatting(String),
}
