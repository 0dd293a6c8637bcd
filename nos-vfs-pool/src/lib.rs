//! NOS VFS Pool
//!
//! Fixed-capacity node pools for VFS drivers. A driver embeds one
//! `NodePool` per node type; the pool's capacity is a const generic, so all
//! node storage is part of the driver itself and nothing is allocated at
//! run time.
//!
//! ```rust
//! use nos_vfs_pool::NodePool;
//!
//! static CURSORS: NodePool<u32, 4> = NodePool::new("cursors");
//!
//! let node = CURSORS.acquire(0).expect("pool has free slots");
//! assert_eq!(CURSORS.stats().used_slots, 1);
//! drop(node);
//! assert!(CURSORS.is_empty());
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod free_list;
pub mod pool;

pub use pool::{NodePool, PoolStats};
