/// Prometheus Pushgateway publisher.
///
/// Encodes a batch of folder-size readings into the Prometheus text
/// exposition format and delivers it with a single
/// `PUT {base}/metrics/job/{job}/instance/{instance}`. PUT replaces the
/// whole metric group for that (job, instance) pair, so every run
/// overwrites the previous run's readings rather than merging with them.
use anyhow::{anyhow, Context};
use hdfsgauge_core::model::FolderSizeReading;
use hdfsgauge_core::publish::GaugePublisher;
use std::time::Duration;
use tracing::debug;

/// The single metric this tool exports, dimensioned by a `folder` label.
pub const METRIC_NAME: &str = "disk_usage_bytes";

/// Pushgateway job name used as the first grouping label.
pub const JOB_NAME: &str = "disk_usage";

const METRIC_HELP: &str = "Total size of files in this folder";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking Pushgateway client for one-shot gauge batches.
pub struct PushgatewayPublisher {
    http: reqwest::blocking::Client,
    push_url: String,
}

impl PushgatewayPublisher {
    /// Create a publisher pushing to `base_url`, grouped by the fixed job
    /// name and `instance` (the service label identifying this process).
    pub fn new(base_url: &str, instance: &str) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        let base = base_url.trim_end_matches('/');
        Ok(Self {
            http,
            push_url: format!("{base}/metrics/job/{JOB_NAME}/instance/{instance}"),
        })
    }
}

impl GaugePublisher for PushgatewayPublisher {
    fn push(&self, readings: &[FolderSizeReading]) -> anyhow::Result<()> {
        let body = encode_gauge_batch(readings);
        debug!("PUT {} ({} bytes)", self.push_url, body.len());

        let response = self
            .http
            .put(&self.push_url)
            .body(body)
            .send()
            .context("push request failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Pushgateway returned HTTP {status}"));
        }
        Ok(())
    }
}

/// Render the batch in the text exposition format.
fn encode_gauge_batch(readings: &[FolderSizeReading]) -> String {
    let mut out = String::with_capacity(64 + readings.len() * 48);
    out.push_str(&format!("# HELP {METRIC_NAME} {METRIC_HELP}\n"));
    out.push_str(&format!("# TYPE {METRIC_NAME} gauge\n"));
    for reading in readings {
        out.push_str(&format!(
            "{METRIC_NAME}{{folder=\"{}\"}} {}\n",
            escape_label_value(&reading.folder),
            reading.total_bytes
        ));
    }
    out
}

/// Escape a label value per the exposition format: backslash, double
/// quote, and newline.
fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
