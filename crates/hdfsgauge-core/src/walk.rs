/// Recursive folder-size aggregation — depth-first, post-order.
///
/// Every directory in the subtree yields exactly one reading: the sum of
/// all file bytes underneath it. Children are resolved before the parent
/// records its own total, and each frame returns its total upward so the
/// whole tree is accumulated in a single pass.
///
/// # Partial-failure policy
///
/// A directory whose listing fails counts as 0 bytes: the failure is
/// logged as a warning, a 0-byte reading is still recorded for it, and
/// the walk carries on with its siblings. One unreadable subtree must
/// never cost visibility into the rest of the tree. Do not upgrade these
/// to aborts. Failed listings are not retried within a run.
use crate::client::DirLister;
use crate::model::size::format_size;
use crate::model::FolderSizeReading;
use tracing::{info, warn};

/// Walk `start` and return one reading per directory in its subtree,
/// including `start` itself (labelled `"/"`).
///
/// Readings are recorded post-order: every directory appears after all of
/// its descendants. Single-threaded; the only suspension points are the
/// individual listing calls.
pub fn aggregate_folder_sizes<L: DirLister>(lister: &L, start: &str) -> Vec<FolderSizeReading> {
    let mut readings = Vec::new();
    walk_dir(lister, start, start, &mut readings);
    readings
}

/// Recurse into `path`, append readings for it and its descendants to
/// `out`, and return `path`'s total for the parent frame to accumulate.
fn walk_dir<L: DirLister>(
    lister: &L,
    path: &str,
    start: &str,
    out: &mut Vec<FolderSizeReading>,
) -> u64 {
    let mut total: u64 = 0;

    match lister.list(path) {
        Ok(entries) => {
            for entry in &entries {
                if entry.is_dir() {
                    let child_path = format!("{path}/{}", entry.name);
                    total += walk_dir(lister, &child_path, start, out);
                } else {
                    total += entry.length;
                }
            }
        }
        Err(err) => {
            // Tolerated: this subtree contributes 0 and the walk continues.
            warn!(
                "There was an error while reading the folder {path}: {:#}",
                err.source
            );
        }
    }

    let folder = folder_label(path, start);
    info!("Folder {folder}: {} ({total} bytes)", format_size(total));
    out.push(FolderSizeReading::new(folder, total));

    total
}

/// Label for `path` relative to the walk's `start` path.
///
/// The start itself maps to `"/"`; any descendant maps to `"/" + relative
/// path`. Separators are already forward slashes on the remote filesystem,
/// so this is pure prefix stripping.
fn folder_label(path: &str, start: &str) -> String {
    if path == start {
        return "/".to_string();
    }
    let rel = path
        .strip_prefix(start)
        .unwrap_or(path)
        .trim_start_matches('/');
    format!("/{rel}")
}
