//! hdfsgauge — per-folder HDFS disk usage exporter.
//!
//! Walks the newest completed partition under a configured HDFS root,
//! sums file bytes per folder, and pushes the result to a Prometheus
//! Pushgateway. Thin binary entry point: all logic lives in the
//! `hdfsgauge-core` and `hdfsgauge-remote` crates.

mod config;

use anyhow::Context;
use hdfsgauge_core::run::{run, RunStatus};
use hdfsgauge_remote::{PushgatewayPublisher, WebHdfsClient};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = config::Config::from_env()?;
    tracing::info!(
        "hdfsgauge starting: root {} via {}",
        config.root_path,
        config.hdfs_proxy_url
    );

    let lister = WebHdfsClient::new(&config.hdfs_proxy_url)?;
    let publisher = PushgatewayPublisher::new(&config.pushgateway_url, &config.service)?;

    match run(&lister, &publisher, &config.root_path).context("run aborted")? {
        RunStatus::Published { folders } => {
            tracing::info!(
                "Metrics were successfully pushed to the Pushgateway ({folders} folders)"
            );
        }
        RunStatus::NoCompletePartition => {
            tracing::info!("Nothing to publish this run");
        }
        RunStatus::PushFailed { folders } => {
            // The push error itself was already logged by the run.
            tracing::warn!(
                "Computed {folders} folder sizes but the push did not reach the gateway"
            );
        }
    }

    Ok(())
}
