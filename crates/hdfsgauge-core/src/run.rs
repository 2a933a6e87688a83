/// One-shot run orchestration: select → walk → push.
///
/// This is the single callable the binary invokes. Severities differ by
/// stage on purpose:
///
/// - the partition root being unlistable makes the whole run meaningless
///   and aborts it before any output (`Err`);
/// - no complete partition is an expected state, reported as a distinct
///   skipped status with nothing published;
/// - a push failure after a successful walk is error-logged and surfaced
///   as its own status — the sizes were computed, the run is not retried.
use crate::client::{DirLister, ListError};
use crate::publish::GaugePublisher;
use crate::select::latest_complete_partition;
use crate::walk::aggregate_folder_sizes;
use tracing::{error, info};

/// Terminal state of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// The batch reached the gateway; `folders` readings were pushed.
    Published { folders: usize },
    /// No partition under the root carries the completion sentinel.
    /// Nothing was walked and no batch was ever built.
    NoCompletePartition,
    /// Sizes were computed but the gateway rejected or never received
    /// the batch. Already error-logged; not retried within this run.
    PushFailed { folders: usize },
}

/// Execute one full run against `root`.
pub fn run<L: DirLister, P: GaugePublisher>(
    lister: &L,
    publisher: &P,
    root: &str,
) -> Result<RunStatus, ListError> {
    let Some(target) = latest_complete_partition(lister, root)? else {
        return Ok(RunStatus::NoCompletePartition);
    };

    info!("Browsing latest complete partition: {target}");
    let readings = aggregate_folder_sizes(lister, &target);
    let folders = readings.len();

    match publisher.push(&readings) {
        Ok(()) => {
            info!("Pushed {folders} folder-size readings to the gateway");
            Ok(RunStatus::Published { folders })
        }
        Err(err) => {
            error!("An error occurred while pushing the metrics: {err:#}");
            Ok(RunStatus::PushFailed { folders })
        }
    }
}
