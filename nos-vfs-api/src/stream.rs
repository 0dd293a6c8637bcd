//! Backing character stream contract
//!
//! Streams are opaque to the VFS layer: nodes call these primitives and pass
//! the results back untouched. Whether a call blocks is up to the stream.
//! A stream shared by several open nodes serializes access itself.

use crate::error::{VfsError, VfsResult};

/// A sequential byte stream such as a serial port or a log sink.
pub trait Stream: Sync {
    /// Writes bytes, returning how many were accepted.
    fn write(&self, buf: &[u8]) -> VfsResult<usize>;

    /// Reads bytes, returning how many were transferred. `Ok(0)` means end
    /// of stream.
    fn read(&self, buf: &mut [u8]) -> VfsResult<usize>;

    /// Writes a single byte.
    fn put(&self, byte: u8) -> VfsResult<()> {
        match self.write(core::slice::from_ref(&byte))? {
            1 => Ok(()),
            _ => Err(VfsError::Io(crate::error::errno::EIO)),
        }
    }

    /// Reads a single byte, `None` at end of stream.
    fn get(&self) -> VfsResult<Option<u8>> {
        let mut byte = 0u8;
        match self.read(core::slice::from_mut(&mut byte))? {
            0 => Ok(None),
            _ => Ok(Some(byte)),
        }
    }
}
