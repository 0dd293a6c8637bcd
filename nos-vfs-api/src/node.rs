//! Directory and file node capabilities

use crate::error::VfsResult;
use crate::mode::{NodeKind, OpenMode};
use crate::stream::Stream;

/// One entry produced by directory enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntryInfo<'a> {
    /// Entry name, relative to the directory
    pub name: &'a str,
    /// Kind of the entry
    pub kind: NodeKind,
    /// Size in bytes as reported by the backing resource
    pub size: u64,
}

/// Node attributes (stat structure equivalent)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStat {
    /// Kind of the node
    pub kind: NodeKind,
    /// Size in bytes as reported by the backing resource
    pub size: u64,
}

/// Seek whence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekWhence {
    /// Absolute position
    Set,
    /// Relative to current
    Cur,
    /// Relative to end
    End,
}

/// An open directory.
///
/// Each open directory node carries its own enumeration cursor.
pub trait DirectoryNode: Send + Sync {
    /// Rewinds the cursor and returns the first entry.
    fn first(&self) -> VfsResult<Option<DirEntryInfo<'_>>> {
        self.rewind();
        self.next()
    }

    /// Returns the entry under the cursor and advances it, or `None` once
    /// the end of the directory has been reached.
    fn next(&self) -> VfsResult<Option<DirEntryInfo<'_>>>;

    /// Resets the cursor to the first entry.
    fn rewind(&self);

    /// Attributes of the directory itself
    fn stat(&self) -> VfsResult<NodeStat> {
        Ok(NodeStat { kind: NodeKind::Directory, size: 0 })
    }
}

/// An open file.
pub trait FileNode: Send + Sync {
    /// Reads up to `buf.len()` bytes.
    fn read(&self, buf: &mut [u8]) -> VfsResult<usize>;

    /// Writes up to `buf.len()` bytes.
    fn write(&self, buf: &[u8]) -> VfsResult<usize>;

    /// Moves the file position.
    fn set_position(&self, offset: i64, whence: SeekWhence) -> VfsResult<u64>;

    /// Current file position.
    fn position(&self) -> VfsResult<u64>;

    /// Attributes of the file
    fn stat(&self) -> VfsResult<NodeStat>;

    /// Mode the file was opened with
    fn mode(&self) -> OpenMode;

    /// Backing stream, for nodes that wrap one
    fn stream(&self) -> Option<&dyn Stream> {
        None
    }
}
