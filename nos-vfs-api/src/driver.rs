//! VFS driver capability
//!
//! A driver answers open requests for paths below one mount root. The router
//! that owns the mount table strips the root before calling in, so `path` is
//! relative; drivers still tolerate leading separators.

use crate::error::VfsResult;
use crate::mode::OpenMode;
use crate::node::{DirectoryNode, FileNode};
use crate::object::NodeRef;

/// Path separator
pub const SEPARATOR: char = '/';

/// Handle to an open directory node
pub type DirectoryRef<'a> = NodeRef<'a, dyn DirectoryNode + 'a>;

/// Handle to an open file node
pub type FileRef<'a> = NodeRef<'a, dyn FileNode + 'a>;

/// A mounted VFS driver.
///
/// Implementations must be reentrant: concurrent opens on one instance
/// never corrupt its state.
pub trait Driver: Sync {
    /// Mount label this driver answers to
    fn root_name(&self) -> &str;

    /// Opens the directory at `path`.
    fn open_directory(&self, path: &str) -> VfsResult<DirectoryRef<'_>>;

    /// Opens the file at `path` with `mode`.
    fn open_file(&self, path: &str, mode: OpenMode) -> VfsResult<FileRef<'_>>;
}

/// Removes leading separators.
pub fn strip_separators(path: &str) -> &str {
    path.trim_start_matches(SEPARATOR)
}

/// Returns true if `path` designates the driver root.
pub fn is_root(path: &str) -> bool {
    path.chars().all(|c| c == SEPARATOR)
}

/// Splits an absolute path into the remainder below `root`, if `path` lies
/// under that mount root.
///
/// `"/streams/console"` with root `"streams"` gives `Some("console")`;
/// `"/streamsx"` gives `None`.
pub fn strip_mount_root<'p>(path: &'p str, root: &str) -> Option<&'p str> {
    let rest = strip_separators(path).strip_prefix(root)?;
    if rest.is_empty() {
        Some(rest)
    } else if rest.starts_with(SEPARATOR) {
        Some(strip_separators(rest))
    } else {
        None
    }
}
