/// A single child returned by listing a remote directory.
///
/// Entries carry only what the aggregation needs: a name, a file/directory
/// discriminator, and a byte length. Full paths are built by the caller,
/// so an entry never holds more than its own name.
use compact_str::CompactString;

/// Kind discriminator for a listed child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file (or anything file-like — symlinks count as files).
    File,
    /// A directory that can itself be listed.
    Directory,
}

/// One child of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Name within the parent listing (NOT the full path).
    pub name: CompactString,
    /// File or directory.
    pub kind: EntryKind,
    /// Byte length as reported by the filesystem.
    /// Meaningful only for files; directories report 0 here and their
    /// recursive size is computed by the walk, never read from a listing.
    pub length: u64,
}

impl DirectoryEntry {
    /// Create a file entry with the given name and byte length.
    pub fn file(name: impl Into<CompactString>, length: u64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            length,
        }
    }

    /// Create a directory entry.
    pub fn dir(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            length: 0,
        }
    }

    /// `true` if this entry can be listed as a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
