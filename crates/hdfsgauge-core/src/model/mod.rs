/// Data model for hdfsgauge.
///
/// Re-exports the directory-listing and reading types used across the crate.
pub mod entry;
pub mod reading;
pub mod size;

pub use entry::{DirectoryEntry, EntryKind};
pub use reading::FolderSizeReading;
