/// The unit of output: one (folder label, byte total) record.
///
/// A reading is created once, when its directory's listing and all
/// descendants have been fully resolved, and is never updated afterwards.
/// The batch of readings from one walk is pushed to the gateway as a whole.

/// One gauge sample for a single directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderSizeReading {
    /// Folder label, relative to the walk's start path and `/`-rooted.
    /// The start path itself is labelled `"/"`; any other directory is
    /// `"/" + relative path` with forward-slash separators.
    pub folder: String,
    /// Sum of the byte lengths of every file in this folder's subtree.
    pub total_bytes: u64,
}

impl FolderSizeReading {
    pub fn new(folder: impl Into<String>, total_bytes: u64) -> Self {
        Self {
            folder: folder.into(),
            total_bytes,
        }
    }
}
