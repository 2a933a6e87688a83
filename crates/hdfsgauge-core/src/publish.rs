/// The metrics-publication boundary.
///
/// The core computes a batch of readings and hands it over in one call;
/// how that batch reaches a collector (wire format, endpoint, grouping
/// labels) is entirely the implementation's business. Tests substitute a
/// recording fake to assert on what would have been pushed.
use crate::model::FolderSizeReading;

/// Delivers one batch of folder-size gauge readings to a collector.
pub trait GaugePublisher {
    /// Push the whole batch atomically. Called at most once per run.
    ///
    /// A failure here is reported to the operator but does not invalidate
    /// the computed readings; the core never retries.
    fn push(&self, readings: &[FolderSizeReading]) -> anyhow::Result<()>;
}
