//! Reference streams
//!
//! `NullStream` swallows everything. `LoopbackStream` is a fixed-size byte
//! ring: reads return what earlier writes stored. Neither blocks; a full
//! loopback accepts fewer bytes than offered and an empty one reads 0.

use nos_vfs_api::{Stream, VfsResult};
use spin::Mutex;

/// Stream that discards writes and is always at end of stream
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStream;

impl Stream for NullStream {
    fn write(&self, buf: &[u8]) -> VfsResult<usize> {
        Ok(buf.len())
    }

    fn read(&self, _buf: &mut [u8]) -> VfsResult<usize> {
        Ok(0)
    }
}

struct Ring<const N: usize> {
    buf: [u8; N],
    head: usize,
    len: usize,
}

/// In-memory byte ring of capacity `N`
pub struct LoopbackStream<const N: usize> {
    ring: Mutex<Ring<N>>,
}

impl<const N: usize> LoopbackStream<N> {
    /// Create an empty loopback stream
    pub const fn new() -> Self {
        Self {
            ring: Mutex::new(Ring { buf: [0; N], head: 0, len: 0 }),
        }
    }

    /// Number of buffered bytes
    pub fn len(&self) -> usize {
        self.ring.lock().len
    }

    /// Check if nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const N: usize> Default for LoopbackStream<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Stream for LoopbackStream<N> {
    fn write(&self, buf: &[u8]) -> VfsResult<usize> {
        let mut ring = self.ring.lock();
        let count = buf.len().min(N - ring.len);
        for &byte in &buf[..count] {
            let tail = (ring.head + ring.len) % N;
            ring.buf[tail] = byte;
            ring.len += 1;
        }
        Ok(count)
    }

    fn read(&self, buf: &mut [u8]) -> VfsResult<usize> {
        let mut ring = self.ring.lock();
        let count = buf.len().min(ring.len);
        for slot in &mut buf[..count] {
            *slot = ring.buf[ring.head];
            ring.head = (ring.head + 1) % N;
            ring.len -= 1;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_stream() {
        let null = NullStream;
        assert_eq!(null.write(b"dropped").unwrap(), 7);
        let mut buf = [0u8; 4];
        assert_eq!(null.read(&mut buf).unwrap(), 0);
        assert_eq!(null.get().unwrap(), None);
    }

    #[test]
    fn test_loopback_wraps_around() {
        let lo = LoopbackStream::<4>::new();
        assert_eq!(lo.write(b"abc").unwrap(), 3);
        let mut buf = [0u8; 2];
        assert_eq!(lo.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf, b"ab");
        assert_eq!(lo.write(b"defg").unwrap(), 3);
        assert_eq!(lo.len(), 4);

        let mut out = [0u8; 8];
        assert_eq!(lo.read(&mut out).unwrap(), 4);
        assert_eq!(&out[..4], b"cdef");
        assert!(lo.is_empty());
    }

    #[test]
    fn test_loopback_put_get() {
        let lo = LoopbackStream::<1>::new();
        lo.put(b'x').unwrap();
        assert!(lo.put(b'y').is_err());
        assert_eq!(lo.get().unwrap(), Some(b'x'));
        assert_eq!(lo.get().unwrap(), None);
    }
}
