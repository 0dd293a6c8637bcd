//! Streams driver build-time configuration

use static_assertions::const_assert;

use crate::driver::StreamsDriver;

/// Number of directory nodes available to a default streams driver
#[cfg(not(feature = "minimal"))]
pub const DRV_STREAMS_DIR_NODES_NUM: usize = 2;
/// Number of directory nodes available to a default streams driver
#[cfg(feature = "minimal")]
pub const DRV_STREAMS_DIR_NODES_NUM: usize = 1;

/// Number of file nodes available to a default streams driver
#[cfg(not(feature = "minimal"))]
pub const DRV_STREAMS_FILE_NODES_NUM: usize = 8;
/// Number of file nodes available to a default streams driver
#[cfg(feature = "minimal")]
pub const DRV_STREAMS_FILE_NODES_NUM: usize = 2;

const_assert!(DRV_STREAMS_DIR_NODES_NUM >= 1);
const_assert!(DRV_STREAMS_FILE_NODES_NUM >= 1);

/// Streams driver sized by the configured pool capacities
pub type DefaultStreamsDriver<'a> =
    StreamsDriver<'a, DRV_STREAMS_DIR_NODES_NUM, DRV_STREAMS_FILE_NODES_NUM>;
