/// WebHDFS listing client.
///
/// Implements [`DirLister`] over the WebHDFS REST API's `LISTSTATUS`
/// operation: `GET {base}/webhdfs/v1{path}?op=LISTSTATUS`. Unauthenticated
/// access through an HDFS proxy, matching the deployment this tool runs
/// in; auth and encryption are out of scope here.
use anyhow::{anyhow, Context};
use hdfsgauge_core::client::{DirLister, ListError};
use hdfsgauge_core::model::{DirectoryEntry, EntryKind};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Per-request timeout. Listings are small JSON bodies; anything slower
/// than this means the proxy or a datanode is wedged.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking WebHDFS client for directory listings.
pub struct WebHdfsClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl WebHdfsClient {
    /// Create a client against `base_url` (e.g. `http://proxy:8070`).
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the LISTSTATUS URL for an absolute HDFS path.
    fn liststatus_url(&self, path: &str) -> String {
        format!("{}/webhdfs/v1{path}?op=LISTSTATUS", self.base_url)
    }
}

impl DirLister for WebHdfsClient {
    fn list(&self, path: &str) -> Result<Vec<DirectoryEntry>, ListError> {
        let url = self.liststatus_url(path);
        debug!("LISTSTATUS {url}");

        let fetch = || -> anyhow::Result<ListStatusResponse> {
            let response = self.http.get(&url).send().context("request failed")?;
            let status = response.status();
            if !status.is_success() {
                return Err(anyhow!("LISTSTATUS returned HTTP {status}"));
            }
            response.json().context("malformed LISTSTATUS body")
        };

        let body = fetch().map_err(|e| ListError::new(path, e))?;
        Ok(body
            .file_statuses
            .file_status
            .into_iter()
            .map(DirectoryEntry::from)
            .collect())
    }
}

/// `LISTSTATUS` response body, per the WebHDFS JSON schema.
#[derive(Debug, Deserialize)]
struct ListStatusResponse {
    #[serde(rename = "FileStatuses")]
    file_statuses: FileStatuses,
}

#[derive(Debug, Deserialize)]
struct FileStatuses {
    #[serde(rename = "FileStatus")]
    file_status: Vec<FileStatus>,
}

#[derive(Debug, Deserialize)]
struct FileStatus {
    #[serde(rename = "pathSuffix")]
    path_suffix: String,
    #[serde(rename = "type")]
    kind: String,
    length: u64,
}

impl From<FileStatus> for DirectoryEntry {
    fn from(status: FileStatus) -> Self {
        // WebHDFS reports FILE, DIRECTORY, or SYMLINK. The walk only
        // distinguishes listable-vs-not, so symlinks count as files.
        let kind = if status.kind == "DIRECTORY" {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Self {
            name: status.path_suffix.into(),
            kind,
            length: status.length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Abbreviated but schema-faithful LISTSTATUS body (extra fields like
    /// owner and modificationTime must be ignored).
    const SAMPLE: &str = r#"{
        "FileStatuses": {
            "FileStatus": [
                {
                    "accessTime": 0,
                    "blockSize": 0,
                    "length": 0,
                    "modificationTime": 1320895981256,
                    "owner": "szetszwo",
                    "pathSuffix": "bar",
                    "permission": "711",
                    "replication": 0,
                    "type": "DIRECTORY"
                },
                {
                    "accessTime": 1320171722771,
                    "blockSize": 33554432,
                    "length": 24930,
                    "modificationTime": 1320171722771,
                    "owner": "webuser",
                    "pathSuffix": "a.patch",
                    "permission": "644",
                    "replication": 1,
                    "type": "FILE"
                }
            ]
        }
    }"#;

    #[test]
    fn parses_liststatus_body() {
        let body: ListStatusResponse = serde_json::from_str(SAMPLE).unwrap();
        let entries: Vec<DirectoryEntry> = body
            .file_statuses
            .file_status
            .into_iter()
            .map(DirectoryEntry::from)
            .collect();

        assert_eq!(
            entries,
            vec![
                DirectoryEntry::dir("bar"),
                DirectoryEntry::file("a.patch", 24930),
            ]
        );
    }

    #[test]
    fn symlinks_map_to_files() {
        let status = FileStatus {
            path_suffix: "link".to_string(),
            kind: "SYMLINK".to_string(),
            length: 0,
        };
        assert_eq!(DirectoryEntry::from(status).kind, EntryKind::File);
    }

    #[test]
    fn builds_liststatus_url_without_double_slash() {
        let client = WebHdfsClient::new("http://proxy:8070/").unwrap();
        assert_eq!(
            client.liststatus_url("/fulltext/volume/1/complete"),
            "http://proxy:8070/webhdfs/v1/fulltext/volume/1/complete?op=LISTSTATUS"
        );
    }
}
