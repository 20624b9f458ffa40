//! Library surface of g13_monitor, shared by the binary and the integration tests.

pub mod channel;
pub mod config;
pub mod error;
pub mod format;
pub mod monitor;
pub mod sampler;
pub mod types;

pub use channel::{ChannelWriter, PublishOutcome};
pub use config::MonitorConfig;
pub use error::MonitorError;
pub use monitor::{LoopState, LoopStats, Monitor};
pub use sampler::{MetricSampler, MetricSource};
pub use types::Sample;
