//! Streams driver nodes

use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use nos_vfs_api::{
    DirEntryInfo, DirectoryNode, FileNode, NodeKind, NodeStat, OpenMode, SeekWhence, Stream,
    VfsError, VfsResult,
};

use crate::binding::StreamBinding;

/// Open view of the driver's root directory.
///
/// Each open directory has its own cursor into the stream table.
pub struct StreamDirNode<'a> {
    streams: &'a [StreamBinding<'a>],
    index: AtomicUsize,
}

impl<'a> StreamDirNode<'a> {
    pub(crate) fn new(streams: &'a [StreamBinding<'a>]) -> Self {
        Self {
            streams,
            index: AtomicUsize::new(0),
        }
    }

    /// Position of the cursor in the stream table
    pub fn index(&self) -> usize {
        self.index.load(Ordering::Relaxed)
    }
}

impl DirectoryNode for StreamDirNode<'_> {
    fn next(&self) -> VfsResult<Option<DirEntryInfo<'_>>> {
        let len = self.streams.len();
        let claimed = self
            .index
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| (i < len).then_some(i + 1));
        Ok(claimed.ok().map(|i| DirEntryInfo {
            name: self.streams[i].name,
            kind: NodeKind::CharDevice,
            size: 0,
        }))
    }

    fn rewind(&self) {
        self.index.store(0, Ordering::Relaxed);
    }
}

impl fmt::Debug for StreamDirNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamDirNode")
            .field("index", &self.index())
            .field("entries", &self.streams.len())
            .finish()
    }
}

/// Open stream file. Reads and writes go straight to the bound stream.
pub struct StreamFileNode<'a> {
    name: &'a str,
    stream: &'a dyn Stream,
    mode: OpenMode,
}

impl<'a> StreamFileNode<'a> {
    pub(crate) fn new(binding: &StreamBinding<'a>, mode: OpenMode) -> Self {
        Self {
            name: binding.name,
            stream: binding.stream,
            mode,
        }
    }

    /// Name the file was opened under
    pub fn name(&self) -> &'a str {
        self.name
    }
}

impl FileNode for StreamFileNode<'_> {
    fn read(&self, buf: &mut [u8]) -> VfsResult<usize> {
        self.stream.read(buf)
    }

    fn write(&self, buf: &[u8]) -> VfsResult<usize> {
        self.stream.write(buf)
    }

    fn set_position(&self, _offset: i64, _whence: SeekWhence) -> VfsResult<u64> {
        Err(VfsError::NotSupported)
    }

    fn position(&self) -> VfsResult<u64> {
        Ok(0)
    }

    fn stat(&self) -> VfsResult<NodeStat> {
        Ok(NodeStat {
            kind: NodeKind::CharDevice,
            size: 0,
        })
    }

    fn mode(&self) -> OpenMode {
        self.mode
    }

    fn stream(&self) -> Option<&dyn Stream> {
        Some(self.stream)
    }
}

impl fmt::Debug for StreamFileNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamFileNode")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .finish()
    }
}
