/// Partition selection — find the latest fully-written partition.
///
/// Top-level directories under the configured root are partition
/// candidates. A candidate is complete once its writer has dropped a
/// sentinel file (`control/merge.done`); anything without the sentinel is
/// still being merged and must not be read. Among complete candidates the
/// lexicographically greatest name wins ("latest").
///
/// # Precondition
///
/// "Latest" is plain string ordering, not numeric or chronological.
/// Writers are expected to name partitions so that lexicographic order
/// matches chronological order (zero-padded timestamps such as
/// `2024-02-01`). This convention is assumed, not validated here.
use crate::client::{DirLister, ListError};
use tracing::{debug, info};

/// Subdirectory of a partition that holds control/marker files.
pub const SENTINEL_DIR: &str = "control";

/// Marker file whose presence means the partition's merge completed.
pub const SENTINEL_FILE: &str = "merge.done";

/// Fixed suffix appended to the chosen partition to reach the payload.
/// A domain convention of the surrounding system, not configurable.
pub const PARTITION_SUFFIX: &str = "barrels/current";

/// Check whether `partition_path` carries the completion sentinel.
///
/// A listing failure on the control path (most commonly: it does not
/// exist yet) marks the candidate incomplete. It is never an error — a
/// half-written partition is an expected state, not a fault.
fn has_merge_done<L: DirLister>(lister: &L, partition_path: &str) -> bool {
    let control_path = format!("{partition_path}/{SENTINEL_DIR}");
    match lister.list(&control_path) {
        Ok(entries) => entries.iter().any(|e| e.name == SENTINEL_FILE),
        Err(err) => {
            debug!("No readable control dir for candidate {partition_path}: {err}");
            false
        }
    }
}

/// Select the latest complete partition under `root` and resolve its
/// payload path (`<root>/<name>/barrels/current`).
///
/// Returns:
/// - `Ok(Some(path))` — a complete partition was found;
/// - `Ok(None)` — no candidate carries `control/merge.done`; an expected
///   terminal state, the caller publishes nothing and exits cleanly;
/// - `Err(_)` — the root itself could not be listed; the run is
///   meaningless and must abort before producing any output.
pub fn latest_complete_partition<L: DirLister>(
    lister: &L,
    root: &str,
) -> Result<Option<String>, ListError> {
    let entries = lister.list(root)?;

    let latest = entries
        .into_iter()
        .filter(|e| e.is_dir())
        .filter(|e| has_merge_done(lister, &format!("{root}/{}", e.name)))
        .map(|e| e.name)
        .max();

    let Some(latest) = latest else {
        info!("No partitions with {SENTINEL_DIR}/{SENTINEL_FILE} found under {root}");
        return Ok(None);
    };

    let path = format!("{root}/{latest}/{PARTITION_SUFFIX}");
    info!("Selected latest complete partition: {path}");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DirectoryEntry;
    use std::collections::HashMap;

    /// Fake lister backed by a path → listing map. Paths absent from the
    /// map fail to list, like a missing directory would.
    struct MapLister(HashMap<&'static str, Vec<DirectoryEntry>>);

    impl DirLister for MapLister {
        fn list(&self, path: &str) -> Result<Vec<DirectoryEntry>, ListError> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| ListError::new(path, anyhow::anyhow!("no such path")))
        }
    }

    fn lister(map: &[(&'static str, Vec<DirectoryEntry>)]) -> MapLister {
        MapLister(map.iter().cloned().collect())
    }

    #[test]
    fn picks_lexicographically_greatest_complete_partition() {
        // 2024-01-01: no control dir at all.
        // 2024-02-01: control/merge.done present.
        // 2024-03-01: control dir present but only other.flag.
        let l = lister(&[
            (
                "/data",
                vec![
                    DirectoryEntry::dir("2024-01-01"),
                    DirectoryEntry::dir("2024-02-01"),
                    DirectoryEntry::dir("2024-03-01"),
                ],
            ),
            (
                "/data/2024-02-01/control",
                vec![DirectoryEntry::file("merge.done", 0)],
            ),
            (
                "/data/2024-03-01/control",
                vec![DirectoryEntry::file("other.flag", 0)],
            ),
        ]);

        let path = latest_complete_partition(&l, "/data").unwrap();
        assert_eq!(
            path.as_deref(),
            Some("/data/2024-02-01/barrels/current")
        );
    }

    #[test]
    fn ordering_is_lexicographic_not_numeric() {
        // "9" sorts after "10" as strings; the selector must honour that.
        let l = lister(&[
            (
                "/data",
                vec![DirectoryEntry::dir("9"), DirectoryEntry::dir("10")],
            ),
            (
                "/data/9/control",
                vec![DirectoryEntry::file("merge.done", 0)],
            ),
            (
                "/data/10/control",
                vec![DirectoryEntry::file("merge.done", 0)],
            ),
        ]);

        let path = latest_complete_partition(&l, "/data").unwrap();
        assert_eq!(path.as_deref(), Some("/data/9/barrels/current"));
    }

    #[test]
    fn sentinel_of_any_kind_counts() {
        // A directory named merge.done still marks completion.
        let l = lister(&[
            ("/data", vec![DirectoryEntry::dir("p1")]),
            (
                "/data/p1/control",
                vec![DirectoryEntry::dir("merge.done")],
            ),
        ]);

        let path = latest_complete_partition(&l, "/data").unwrap();
        assert_eq!(path.as_deref(), Some("/data/p1/barrels/current"));
    }

    #[test]
    fn file_children_of_root_are_not_candidates() {
        let l = lister(&[(
            "/data",
            vec![DirectoryEntry::file("stray.log", 42)],
        )]);

        assert_eq!(latest_complete_partition(&l, "/data").unwrap(), None);
    }

    #[test]
    fn no_complete_partition_is_absence_not_error() {
        let l = lister(&[(
            "/data",
            vec![DirectoryEntry::dir("2024-01-01"), DirectoryEntry::dir("2024-02-01")],
        )]);

        assert_eq!(latest_complete_partition(&l, "/data").unwrap(), None);
    }

    #[test]
    fn unreachable_root_is_fatal() {
        let l = lister(&[]);
        let err = latest_complete_partition(&l, "/data").unwrap_err();
        assert_eq!(err.path, "/data");
    }
}
