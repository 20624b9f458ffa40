//! Entry point for g13_monitor: samples the host once a second and feeds the
//! G13 LCD pipe until SIGINT/SIGTERM.

use std::io::IsTerminal;

use anyhow::Context;
use g13_monitor::{MetricSampler, Monitor, MonitorConfig};
use tokio::signal::unix::{signal, SignalKind};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Register before the first cycle so an early Ctrl+C is not lost.
    let mut sigint = signal(SignalKind::interrupt()).context("register SIGINT handler")?;
    let mut sigterm = signal(SignalKind::terminate()).context("register SIGTERM handler")?;

    let monitor = Monitor::new(MetricSampler::new(), MonitorConfig::default());
    let stats = monitor
        .run(async move {
            tokio::select! {
                _ = sigint.recv() => {}
                _ = sigterm.recv() => {}
            }
        })
        .await;
    debug!(?stats, "monitor stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout)
        .init();
}
