//! Unified logging support for the VFS crates
//!
//! The `vfs_*` macros forward to the `log` crate when this crate is built
//! with the `log` feature. Without it they expand to a dead branch, so
//! arguments are still type-checked and never trigger unused warnings.
//! Which variant is used is decided here, so downstream crates only forward
//! their own `log` feature to `nos-vfs-api/log`.

#[cfg(feature = "log")]
#[doc(hidden)]
#[macro_export]
macro_rules! __vfs_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::__log::$level!(target: "nos_vfs", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __vfs_log {
    ($level:ident, $($arg:tt)*) => {
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}

/// Unified trace-level logging
#[macro_export]
macro_rules! vfs_trace {
    ($($arg:tt)*) => { $crate::__vfs_log!(trace, $($arg)*) };
}

/// Unified debug-level logging
#[macro_export]
macro_rules! vfs_debug {
    ($($arg:tt)*) => { $crate::__vfs_log!(debug, $($arg)*) };
}

/// Unified warn-level logging
#[macro_export]
macro_rules! vfs_warn {
    ($($arg:tt)*) => { $crate::__vfs_log!(warn, $($arg)*) };
}

/// Unified error-level logging
#[macro_export]
macro_rules! vfs_error {
    ($($arg:tt)*) => { $crate::__vfs_log!(error, $($arg)*) };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_accept_format_args() {
        let name = "console";
        let slots = 2usize;
        crate::vfs_trace!("reclaimed slot {}", slots);
        crate::vfs_debug!("open '{}' failed", name);
        crate::vfs_warn!("pool exhausted ({} slots)", slots);
        crate::vfs_error!("refcount underflow on '{}'", name);
    }
}
