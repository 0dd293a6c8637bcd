//! Index free list
//!
//! A LIFO stack of free slot indices. Push and pop are O(1) and the whole
//! list lives inline, so a pool needs no memory beyond its own struct.

pub(crate) struct FreeList<const N: usize> {
    stack: [usize; N],
    len: usize,
}

impl<const N: usize> FreeList<N> {
    /// A list holding every index, ordered so that slot 0 is handed out first
    pub(crate) const fn full() -> Self {
        let mut stack = [0usize; N];
        let mut i = 0;
        while i < N {
            stack[i] = N - 1 - i;
            i += 1;
        }
        Self { stack, len: N }
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.stack[self.len])
    }

    pub(crate) fn push(&mut self, index: usize) {
        debug_assert!(self.len < N, "free list overflow");
        debug_assert!(!self.stack[..self.len].contains(&index), "slot {} freed twice", index);
        self.stack[self.len] = index;
        self.len += 1;
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
