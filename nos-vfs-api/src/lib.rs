//! NOS VFS API - Driver and node interfaces for the NOS virtual filesystem
//!
//! This crate defines the contracts shared by every VFS driver: how a driver
//! is asked to open directories and files, what an open node can do, and how
//! the lifetime of an open node is tracked without a heap.
//!
//! # Architecture
//!
//! - **Error**: the `VfsError` taxonomy and errno mapping
//! - **Mode**: open mode flags and node kinds
//! - **Object**: the reference-counted node handle (`NodeRef`) and the
//!   `ObjectOwner` contract implemented by node pools
//! - **Node**: directory and file node capabilities
//! - **Driver**: the driver capability and path helpers
//! - **Stream**: the backing character stream contract
//!
//! # Usage
//!
//! ```rust
//! use nos_vfs_api::{Driver, OpenMode, VfsResult};
//!
//! fn probe(driver: &dyn Driver, name: &str) -> VfsResult<()> {
//!     let file = driver.open_file(name, OpenMode::READ)?;
//!     file.close();
//!     Ok(())
//! }
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "log")]
#[doc(hidden)]
pub use log as __log;

pub mod logging;
pub mod error;
pub mod mode;
pub mod object;
pub mod node;
pub mod driver;
pub mod stream;

// Re-export commonly used types
pub use crate::error::{VfsError, VfsResult};
pub use crate::mode::{NodeKind, OpenMode};
pub use crate::object::{NodeRef, ObjectId, ObjectOwner};
pub use crate::node::{DirEntryInfo, DirectoryNode, FileNode, NodeStat, SeekWhence};
pub use crate::driver::{DirectoryRef, Driver, FileRef, SEPARATOR};
pub use crate::stream::Stream;
