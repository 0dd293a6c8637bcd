//! Reference-counted node objects
//!
//! A node lives in a slot owned by some `ObjectOwner` (normally a node pool
//! inside a driver). Callers never see the slot, only a [`NodeRef`]: cloning
//! the handle retains the node, dropping it releases the node, and the drop
//! that brings the count to zero hands the slot back to its owner.

use core::fmt;
use core::mem::ManuallyDrop;
use core::ops::Deref;

/// Stable identity of a node slot.
///
/// The generation changes every time the slot is reclaimed, so an id kept
/// past the node's death never matches the slot's next occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
    /// Slot index inside the owner
    pub index: usize,
    /// Slot generation at the time the node was created
    pub generation: u32,
}

impl ObjectId {
    /// Create an object id
    pub const fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.index, self.generation)
    }
}

/// Owner of node slots and their reference counts.
///
/// # Safety
///
/// Implementors must keep the storage behind every id with a non-zero count
/// alive and unmoved, and must reclaim a slot only on the release that takes
/// its count from one to zero.
pub unsafe trait ObjectOwner: Sync {
    /// Adds one reference to a live object.
    ///
    /// # Safety
    ///
    /// The caller must already hold a reference to `id`.
    unsafe fn retain(&self, id: ObjectId);

    /// Drops one reference, reclaiming the slot when it was the last one.
    ///
    /// # Safety
    ///
    /// The caller must own one of the references counted for `id` and must
    /// not use that reference afterwards.
    unsafe fn release(&self, id: ObjectId);

    /// Current reference count of `id`, or 0 if `id` is stale.
    fn ref_count(&self, id: ObjectId) -> usize;
}

/// Shared-ownership handle to a live node.
///
/// `Clone` is the base-object retain, `Drop` is release. There is no way
/// to reach the node after the last handle is gone.
pub struct NodeRef<'a, T: ?Sized> {
    node: &'a T,
    owner: &'a dyn ObjectOwner,
    id: ObjectId,
}

impl<'a, T: ?Sized> NodeRef<'a, T> {
    /// Wraps one already-counted reference to `node`.
    ///
    /// # Safety
    ///
    /// `node` must be the object stored in `owner` under `id`, and one unit
    /// of its reference count must be transferred to the returned handle.
    pub unsafe fn from_raw(node: &'a T, owner: &'a dyn ObjectOwner, id: ObjectId) -> Self {
        Self { node, owner, id }
    }

    /// Identity of the underlying slot
    pub fn id(this: &Self) -> ObjectId {
        this.id
    }

    /// Current reference count of the node
    pub fn ref_count(this: &Self) -> usize {
        this.owner.ref_count(this.id)
    }

    /// Takes an additional reference to the node
    pub fn retain(this: &Self) -> Self {
        this.clone()
    }

    /// Gives up this reference
    pub fn release(this: Self) {
        drop(this);
    }

    /// Closes the node. Equivalent to one release.
    pub fn close(self) {
        drop(self);
    }

    /// Returns true if both handles refer to the same live node
    pub fn ptr_eq(a: &Self, b: &NodeRef<'_, T>) -> bool {
        a.id == b.id && core::ptr::addr_eq(a.node as *const T, b.node as *const T)
    }

    /// Converts the handle to a view of the same node, typically an unsizing
    /// cast to a trait object. The reference count moves to the new handle.
    pub fn map<U: ?Sized, F>(this: Self, f: F) -> NodeRef<'a, U>
    where
        F: for<'x> FnOnce(&'x T) -> &'x U,
    {
        let this = ManuallyDrop::new(this);
        NodeRef {
            node: f(this.node),
            owner: this.owner,
            id: this.id,
        }
    }
}

impl<T: ?Sized> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        // SAFETY: `self` holds a counted reference to `id`.
        unsafe { self.owner.retain(self.id) };
        Self {
            node: self.node,
            owner: self.owner,
            id: self.id,
        }
    }
}

impl<T: ?Sized> Drop for NodeRef<'_, T> {
    fn drop(&mut self) {
        // SAFETY: each handle owns exactly one counted reference and this is
        // the last use of it.
        unsafe { self.owner.release(self.id) };
    }
}

impl<T: ?Sized> Deref for NodeRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.node
    }
}

impl<T: ?Sized> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("ref_count", &self.owner.ref_count(self.id))
            .finish()
    }
}
