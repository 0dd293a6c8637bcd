//! Open modes and node kinds

use bitflags::bitflags;

bitflags! {
    /// File open mode.
    ///
    /// Bit values are part of the calling ABI and must not change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenMode: u32 {
        /// Open for reading
        const READ = 0x01;
        /// Open for writing
        const WRITE = 0x02;
        /// Open for reading and writing
        const RDWR = Self::READ.bits() | Self::WRITE.bits();
        /// Create, failing if the name already exists
        const CREATE_EXCL = 0x04;
        /// Create, truncating an existing file
        const CREATE_TRUNCATE = 0x08;
        /// Create if missing, otherwise open
        const CREATE_OPEN = 0x10;
        /// Writes go to the end of the file
        const APPEND = 0x20;
        /// Create if missing and append
        const OPEN_APPEND = Self::CREATE_OPEN.bits() | Self::APPEND.bits();
    }
}

impl OpenMode {
    /// Plain open of an existing name, no access bits.
    pub const OPEN: Self = Self::empty();

    /// Flags that ask the driver to create something.
    pub const CREATION: Self = Self::CREATE_EXCL
        .union(Self::CREATE_TRUNCATE)
        .union(Self::CREATE_OPEN);

    /// Builds a mode from raw ABI bits, keeping unknown bits so drivers can
    /// reject them.
    pub const fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Returns true if bits outside the defined flags are set.
    pub const fn has_unknown_bits(self) -> bool {
        self.bits() & !Self::all().bits() != 0
    }

    /// Returns true if the mode grants read access
    pub const fn can_read(self) -> bool {
        self.contains(Self::READ)
    }

    /// Returns true if the mode grants write access
    pub const fn can_write(self) -> bool {
        self.contains(Self::WRITE)
    }
}

/// Kind of object a node or directory entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Regular file
    Regular,
    /// Directory
    Directory,
    /// Character device, e.g. a stream
    CharDevice,
    /// Block device
    BlockDevice,
}

impl NodeKind {
    /// Returns true for directories
    pub const fn is_dir(self) -> bool {
        matches!(self, NodeKind::Directory)
    }
}
