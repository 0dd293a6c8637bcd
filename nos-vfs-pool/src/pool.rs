//! Node pool
//!
//! A fixed-capacity arena of node slots. Each slot holds one node, its
//! reference count and a generation counter. Free slots are tracked by an
//! index stack behind a spin lock, so acquire and reclaim are O(1) and never
//! touch a heap.
//!
//! A pool is also the `ObjectOwner` of its nodes: `NodeRef` handles call
//! back into it to retain and release, and the release that drops a count to
//! zero puts the slot back on the free list.

use core::cell::UnsafeCell;
use core::fmt;
use core::sync::atomic::{fence, AtomicU32, AtomicUsize, Ordering};

use nos_vfs_api::{vfs_error, vfs_trace, vfs_warn, NodeRef, ObjectId, ObjectOwner};
use spin::Mutex;

use crate::free_list::FreeList;

/// Pool usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Total number of slots in the pool
    pub total_slots: usize,
    /// Number of slots currently holding a live node
    pub used_slots: usize,
    /// Highest number of simultaneously used slots
    pub peak_used: usize,
    /// Number of acquire attempts that found the pool exhausted
    pub failed_acquires: usize,
}

struct Slot<T> {
    refs: AtomicUsize,
    generation: AtomicU32,
    value: UnsafeCell<Option<T>>,
}

impl<T> Slot<T> {
    const fn vacant() -> Self {
        Self {
            refs: AtomicUsize::new(0),
            generation: AtomicU32::new(0),
            value: UnsafeCell::new(None),
        }
    }
}

struct PoolState<const N: usize> {
    free: FreeList<N>,
    peak_used: usize,
    failed_acquires: usize,
}

/// A pool of at most `N` live nodes of type `T`.
pub struct NodePool<T, const N: usize> {
    name: &'static str,
    slots: [Slot<T>; N],
    state: Mutex<PoolState<N>>,
}

// SAFETY: slot values are written only by the thread that owns the slot
// exclusively (fresh off the free list, or after the count reached zero)
// and are otherwise only shared as `&T`.
unsafe impl<T: Send + Sync, const N: usize> Sync for NodePool<T, N> {}

impl<T, const N: usize> NodePool<T, N> {
    const CAPACITY_OK: () = assert!(N >= 1, "node pool capacity must be at least 1");

    /// Create an empty pool. `name` is used in log messages.
    pub const fn new(name: &'static str) -> Self {
        let () = Self::CAPACITY_OK;
        Self {
            name,
            slots: [const { Slot::<T>::vacant() }; N],
            state: Mutex::new(PoolState {
                free: FreeList::full(),
                peak_used: 0,
                failed_acquires: 0,
            }),
        }
    }

    /// Pool name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get pool statistics
    pub fn stats(&self) -> PoolStats {
        let state = self.state.lock();
        PoolStats {
            total_slots: N,
            used_slots: N - state.free.len(),
            peak_used: state.peak_used,
            failed_acquires: state.failed_acquires,
        }
    }

    /// Check if no node is live
    pub fn is_empty(&self) -> bool {
        self.state.lock().free.len() == N
    }

    /// Check if every slot is live
    pub fn is_full(&self) -> bool {
        self.state.lock().free.len() == 0
    }
}

impl<T: Send + Sync, const N: usize> NodePool<T, N> {
    /// Stores `value` in a free slot and returns the first handle to it.
    ///
    /// Returns `None` when all slots are live; `value` is dropped in that
    /// case. Never blocks waiting for a slot.
    pub fn acquire(&self, value: T) -> Option<NodeRef<'_, T>> {
        let index = {
            let mut state = self.state.lock();
            match state.free.pop() {
                Some(index) => {
                    let used = N - state.free.len();
                    if used > state.peak_used {
                        state.peak_used = used;
                    }
                    index
                }
                None => {
                    state.failed_acquires += 1;
                    drop(state);
                    vfs_warn!("{}: pool exhausted ({} slots)", self.name, N);
                    return None;
                }
            }
        };

        let slot = &self.slots[index];
        // SAFETY: the index was just taken off the free list, so no handle
        // and no other acquirer can reach this slot.
        let node: &T = unsafe { &*(*slot.value.get()).insert(value) };
        slot.refs.store(1, Ordering::Release);
        let id = ObjectId::new(index, slot.generation.load(Ordering::Relaxed));
        vfs_trace!("{}: acquired slot {}", self.name, id);
        // SAFETY: the count of one set above belongs to this handle.
        Some(unsafe { NodeRef::from_raw(node, self, id) })
    }

    /// Returns a new handle to the node `id` if it is still live.
    ///
    /// Fails for ids whose node has been released, even if the slot has
    /// been reused since.
    pub fn upgrade(&self, id: ObjectId) -> Option<NodeRef<'_, T>> {
        let slot = self.slots.get(id.index)?;
        {
            // Held so the slot cannot be reclaimed and reacquired between
            // the generation check and the increment.
            let _state = self.state.lock();
            if slot.generation.load(Ordering::Relaxed) != id.generation {
                return None;
            }
            let mut current = slot.refs.load(Ordering::Relaxed);
            loop {
                if current == 0 {
                    return None;
                }
                match slot.refs.compare_exchange_weak(
                    current,
                    current + 1,
                    Ordering::Acquire,
                    Ordering::Relaxed,
                ) {
                    Ok(_) => break,
                    Err(actual) => current = actual,
                }
            }
        }
        // SAFETY: the count taken above keeps the value in place.
        let node = unsafe { (*slot.value.get()).as_ref() }?;
        // SAFETY: the increment above belongs to this handle.
        Some(unsafe { NodeRef::from_raw(node, self, id) })
    }
}

// SAFETY: values stay in their slot while the count is non-zero and a slot
// is reclaimed only by the release that takes its count to zero.
unsafe impl<T: Send + Sync, const N: usize> ObjectOwner for NodePool<T, N> {
    unsafe fn retain(&self, id: ObjectId) {
        let Some(slot) = self.slots.get(id.index) else {
            vfs_error!("{}: retain of unknown slot {}", self.name, id);
            return;
        };
        if slot.generation.load(Ordering::Relaxed) != id.generation {
            vfs_error!("{}: retain of stale node {}", self.name, id);
            return;
        }
        let revived = slot
            .refs
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| (n > 0).then_some(n + 1));
        if revived.is_err() {
            vfs_error!("{}: retain of dead node {}", self.name, id);
        }
    }

    unsafe fn release(&self, id: ObjectId) {
        let Some(slot) = self.slots.get(id.index) else {
            vfs_error!("{}: release of unknown slot {}", self.name, id);
            return;
        };

        // The generation check and the decrement happen under the state lock,
        // so a slot cannot be reclaimed and handed out again in between.
        let mut state = self.state.lock();
        if slot.generation.load(Ordering::Relaxed) != id.generation {
            drop(state);
            vfs_error!("{}: release of stale node {}", self.name, id);
            return;
        }
        let mut current = slot.refs.load(Ordering::Relaxed);
        loop {
            if current == 0 {
                drop(state);
                vfs_error!("{}: release of dead node {}", self.name, id);
                return;
            }
            match slot.refs.compare_exchange_weak(
                current,
                current - 1,
                Ordering::Release,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }
        if current > 1 {
            return;
        }

        fence(Ordering::Acquire);
        // SAFETY: the count reached zero and the slot is not yet on the free
        // list, so no handle can reach the value any more.
        let value = unsafe { (*slot.value.get()).take() };
        slot.generation.fetch_add(1, Ordering::Relaxed);
        state.free.push(id.index);
        drop(state);
        vfs_trace!("{}: reclaimed slot {}", self.name, id);
        drop(value);
    }

    fn ref_count(&self, id: ObjectId) -> usize {
        match self.slots.get(id.index) {
            Some(slot) if slot.generation.load(Ordering::Relaxed) == id.generation => {
                slot.refs.load(Ordering::Acquire)
            }
            _ => 0,
        }
    }
}

impl<T, const N: usize> fmt::Debug for NodePool<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodePool")
            .field("name", &self.name)
            .field("stats", &self.stats())
            .finish()
    }
}
