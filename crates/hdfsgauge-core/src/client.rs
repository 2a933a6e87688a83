/// The remote-filesystem listing boundary.
///
/// Everything the selector and the walk know about the filesystem goes
/// through [`DirLister`]. Production code plugs in the WebHDFS client;
/// tests plug in in-memory fakes, so neither algorithm ever touches a
/// socket in the test suite.
use crate::model::DirectoryEntry;
use thiserror::Error;

/// A directory listing that could not be obtained.
///
/// One opaque failure type on purpose: the caller decides severity.
/// The same error is fatal when listing the partition root, merely
/// invalidating when probing a sentinel path, and tolerated (subtree
/// counts as 0 bytes) during the aggregation walk.
#[derive(Debug, Error)]
#[error("failed to list {path}")]
pub struct ListError {
    /// The path whose listing failed.
    pub path: String,
    /// Underlying transport or filesystem fault.
    #[source]
    pub source: anyhow::Error,
}

impl ListError {
    pub fn new(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// Lists a remote directory's immediate children.
///
/// No ordering guarantee is required of implementations; the aggregation
/// is commutative and the selector sorts what it needs itself.
pub trait DirLister {
    /// Return the direct children of `path`, or a failure.
    fn list(&self, path: &str) -> Result<Vec<DirectoryEntry>, ListError>;
}
