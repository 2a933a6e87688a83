/// Process configuration from environment variables.
///
/// The tool is scheduled (cron or an orchestrator) with its endpoints in
/// the environment rather than on a command line:
///
/// - `HDFS_PROXY_URL`   — base URL of the WebHDFS proxy, e.g. `http://proxy:8070`
/// - `PUSHGATEWAY_URL`  — Pushgateway base URL, e.g. `http://localhost:9091`
/// - `HDFS_ROOT_PATH`   — partition root to scan, e.g. `/fulltext/volume/1/complete`
/// - `SERVICE`          — instance label identifying this deployment,
///                        e.g. `fulltext-production`
use anyhow::Context;
use std::env;

pub struct Config {
    pub hdfs_proxy_url: String,
    pub pushgateway_url: String,
    pub root_path: String,
    pub service: String,
}

impl Config {
    /// Read all four variables, failing with the missing variable's name.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            hdfs_proxy_url: require("HDFS_PROXY_URL")?,
            pushgateway_url: require("PUSHGATEWAY_URL")?,
            root_path: require("HDFS_ROOT_PATH")?,
            service: require("SERVICE")?,
        })
    }
}

fn require(name: &str) -> anyhow::Result<String> {
    env::var(name).with_context(|| format!("environment variable {name} is not set"))
}
