//! NOS VFS Streams
//!
//! A VFS driver exposing character streams as files. The set of streams is
//! a table fixed when the driver is constructed; every entry appears as a
//! file in the driver's single root directory.
//!
//! ```rust
//! use nos_vfs_api::{Driver, OpenMode};
//! use nos_vfs_streams::{LoopbackStream, StreamBinding, StreamsDriver};
//!
//! static CONSOLE: LoopbackStream<64> = LoopbackStream::new();
//! static TABLE: [StreamBinding<'static>; 1] = [StreamBinding::new("console", &CONSOLE)];
//! static STREAMS: StreamsDriver<'static, 1, 4> = StreamsDriver::new("streams", &TABLE);
//!
//! let file = STREAMS.open_file("console", OpenMode::RDWR).unwrap();
//! file.write(b"hello").unwrap();
//! let mut buf = [0u8; 5];
//! file.read(&mut buf).unwrap();
//! assert_eq!(&buf, b"hello");
//! file.close();
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;
pub mod config;
pub mod driver;
pub mod node;
pub mod streams;

pub use binding::StreamBinding;
pub use config::{DefaultStreamsDriver, DRV_STREAMS_DIR_NODES_NUM, DRV_STREAMS_FILE_NODES_NUM};
pub use driver::StreamsDriver;
pub use node::{StreamDirNode, StreamFileNode};
pub use streams::{LoopbackStream, NullStream};
