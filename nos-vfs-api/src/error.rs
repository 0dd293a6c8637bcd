//! VFS error types

use core::fmt;

/// Errors reported by drivers, nodes and backing streams.
///
/// Every failure is local and synchronous. The VFS layer never retries on
/// its own; `OutOfResources` is the only condition expected to clear by
/// itself once another holder releases a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VfsError {
    /// Name absent from the driver's namespace
    NotFound,
    /// A directory operation was applied to a non-directory path
    NotADirectory,
    /// A file operation was applied to a non-file path
    NotAFile,
    /// Exclusive creation of a name that already exists
    AlreadyExists,
    /// Operation or mode combination the driver cannot honor
    NotSupported,
    /// The node pool for the requested node type is exhausted
    OutOfResources,
    /// Failure reported by a backing stream, carried through unchanged
    Io(i32),
}

/// Result type for VFS operations
pub type VfsResult<T> = Result<T, VfsError>;

/// Negative POSIX error codes used at the ABI boundary.
pub mod errno {
    /// No such file or directory
    pub const ENOENT: i32 = -2;
    /// Input/output error
    pub const EIO: i32 = -5;
    /// Out of memory
    pub const ENOMEM: i32 = -12;
    /// File exists
    pub const EEXIST: i32 = -17;
    /// Not a directory
    pub const ENOTDIR: i32 = -20;
    /// Is a directory
    pub const EISDIR: i32 = -21;
    /// Function not implemented
    pub const ENOSYS: i32 = -38;
}

impl VfsError {
    /// Negative errno equivalent of this error.
    ///
    /// `Io` codes are returned as reported by the stream.
    pub const fn errno(self) -> i32 {
        match self {
            VfsError::NotFound => errno::ENOENT,
            VfsError::NotADirectory => errno::ENOTDIR,
            VfsError::NotAFile => errno::EISDIR,
            VfsError::AlreadyExists => errno::EEXIST,
            VfsError::NotSupported => errno::ENOSYS,
            VfsError::OutOfResources => errno::ENOMEM,
            VfsError::Io(code) => code,
        }
    }

    /// Maps a negative errno back to an error. Unknown codes become `Io`.
    pub const fn from_errno(code: i32) -> Self {
        match code {
            errno::ENOENT => VfsError::NotFound,
            errno::ENOTDIR => VfsError::NotADirectory,
            errno::EISDIR => VfsError::NotAFile,
            errno::EEXIST => VfsError::AlreadyExists,
            errno::ENOSYS => VfsError::NotSupported,
            errno::ENOMEM => VfsError::OutOfResources,
            other => VfsError::Io(other),
        }
    }

    /// Returns true if retrying later may succeed.
    pub const fn is_transient(self) -> bool {
        matches!(self, VfsError::OutOfResources)
    }
}

impl fmt::Display for VfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfsError::NotFound => write!(f, "No such file or directory"),
            VfsError::NotADirectory => write!(f, "Not a directory"),
            VfsError::NotAFile => write!(f, "Not a file"),
            VfsError::AlreadyExists => write!(f, "File exists"),
            VfsError::NotSupported => write!(f, "Operation not supported"),
            VfsError::OutOfResources => write!(f, "Out of node resources"),
            VfsError::Io(code) => write!(f, "I/O error: {}", code),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VfsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_round_trip_for_taxonomy() {
        let all = [
            VfsError::NotFound,
            VfsError::NotADirectory,
            VfsError::NotAFile,
            VfsError::AlreadyExists,
            VfsError::NotSupported,
            VfsError::OutOfResources,
        ];
        for err in all {
            assert!(err.errno() < 0);
            assert_eq!(VfsError::from_errno(err.errno()), err);
        }
    }

    #[test]
    fn test_io_code_passes_through() {
        assert_eq!(VfsError::Io(-110).errno(), -110);
        assert_eq!(VfsError::from_errno(errno::EIO), VfsError::Io(errno::EIO));
    }

    #[test]
    fn test_only_exhaustion_is_transient() {
        assert!(VfsError::OutOfResources.is_transient());
        assert!(!VfsError::NotFound.is_transient());
        assert!(!VfsError::Io(-5).is_transient());
    }
}
