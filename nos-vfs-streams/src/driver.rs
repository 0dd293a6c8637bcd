//! Streams VFS driver
//!
//! Exposes a fixed table of named streams as files in one flat directory.
//! The driver owns a pool of directory nodes and a pool of file nodes; both
//! are sized by const generics and live inside the driver, so a driver
//! placed in a `static` needs no allocator at all.

use core::fmt;

use nos_vfs_api::driver::{self, SEPARATOR};
use nos_vfs_api::{
    vfs_debug, vfs_trace, DirectoryNode, DirectoryRef, Driver, FileNode, FileRef, NodeRef,
    OpenMode, VfsError, VfsResult,
};
use nos_vfs_pool::{NodePool, PoolStats};

use crate::binding::{table_len, StreamBinding};
use crate::node::{StreamDirNode, StreamFileNode};

/// Driver serving `D` open directories and `F` open files at most.
pub struct StreamsDriver<'a, const D: usize, const F: usize> {
    root_name: &'a str,
    streams: &'a [StreamBinding<'a>],
    directory_pool: NodePool<StreamDirNode<'a>, D>,
    file_pool: NodePool<StreamFileNode<'a>, F>,
}

impl<'a, const D: usize, const F: usize> StreamsDriver<'a, D, F> {
    /// Create a driver mounted as `root_name` over `streams`.
    ///
    /// The table ends at its first `StreamBinding::END` entry, or at the end
    /// of the slice.
    pub const fn new(root_name: &'a str, streams: &'a [StreamBinding<'a>]) -> Self {
        let (streams, _) = streams.split_at(table_len(streams));
        Self {
            root_name,
            streams,
            directory_pool: NodePool::new("streams-dir"),
            file_pool: NodePool::new("streams-file"),
        }
    }

    /// Bound streams, in table order
    pub fn streams(&self) -> &'a [StreamBinding<'a>] {
        self.streams
    }

    /// Finds the binding named exactly `name`
    pub fn lookup(&self, name: &str) -> Option<&'a StreamBinding<'a>> {
        self.streams.iter().find(|binding| binding.name == name)
    }

    /// Directory node pool statistics
    pub fn directory_stats(&self) -> PoolStats {
        self.directory_pool.stats()
    }

    /// File node pool statistics
    pub fn file_stats(&self) -> PoolStats {
        self.file_pool.stats()
    }

    /// Rejects modes a static stream table cannot honor.
    fn check_mode(mode: OpenMode) -> VfsResult<()> {
        if mode.has_unknown_bits() {
            return Err(VfsError::NotSupported);
        }
        if mode.contains(OpenMode::CREATE_EXCL) {
            return Err(VfsError::AlreadyExists);
        }
        if mode.contains(OpenMode::CREATE_TRUNCATE) {
            return Err(VfsError::NotSupported);
        }
        Ok(())
    }

    fn fail(&self, op: &str, path: &str, err: VfsError) -> VfsError {
        vfs_debug!("{}: {} '{}' failed: {}", self.root_name, op, path, err);
        err
    }
}

impl<'a, const D: usize, const F: usize> Driver for StreamsDriver<'a, D, F> {
    fn root_name(&self) -> &str {
        self.root_name
    }

    fn open_directory<'d>(&'d self, path: &str) -> VfsResult<DirectoryRef<'d>> {
        let name = driver::strip_separators(path).trim_end_matches(SEPARATOR);
        if !name.is_empty() {
            let err = match self.lookup(name) {
                Some(_) => VfsError::NotADirectory,
                None => VfsError::NotFound,
            };
            return Err(self.fail("open_directory", path, err));
        }

        let node = self
            .directory_pool
            .acquire(StreamDirNode::new(self.streams))
            .ok_or_else(|| self.fail("open_directory", path, VfsError::OutOfResources))?;
        vfs_trace!("{}: opened root directory as {}", self.root_name, NodeRef::id(&node));
        Ok(NodeRef::map::<dyn DirectoryNode + 'd, _>(node, |dir| {
            dir as &(dyn DirectoryNode + 'd)
        }))
    }

    fn open_file<'d>(&'d self, path: &str, mode: OpenMode) -> VfsResult<FileRef<'d>> {
        let name = driver::strip_separators(path);
        if name.is_empty() {
            return Err(self.fail("open_file", path, VfsError::NotAFile));
        }
        let binding = self
            .lookup(name)
            .ok_or_else(|| self.fail("open_file", path, VfsError::NotFound))?;
        Self::check_mode(mode).map_err(|err| self.fail("open_file", path, err))?;

        let node = self
            .file_pool
            .acquire(StreamFileNode::new(binding, mode))
            .ok_or_else(|| self.fail("open_file", path, VfsError::OutOfResources))?;
        vfs_trace!("{}: opened '{}' as {}", self.root_name, name, NodeRef::id(&node));
        Ok(NodeRef::map::<dyn FileNode + 'd, _>(node, |file| {
            file as &(dyn FileNode + 'd)
        }))
    }
}

impl<const D: usize, const F: usize> fmt::Debug for StreamsDriver<'_, D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamsDriver")
            .field("root_name", &self.root_name)
            .field("streams", &self.streams)
            .field("directory_pool", &self.directory_pool)
            .field("file_pool", &self.file_pool)
            .finish()
    }
}
