//! Name to stream bindings

use core::fmt;

use nos_vfs_api::Stream;

use crate::streams::NullStream;

/// Associates a file name with the stream it exposes.
///
/// Tables are plain slices. An entry with an empty name ends the table
/// early; everything after it is ignored. Names must be unique, which is
/// not checked.
#[derive(Clone, Copy)]
pub struct StreamBinding<'a> {
    /// File name of the stream
    pub name: &'a str,
    /// The stream itself
    pub stream: &'a dyn Stream,
}

impl<'a> StreamBinding<'a> {
    /// Bind `stream` under `name`
    pub const fn new(name: &'a str, stream: &'a dyn Stream) -> Self {
        Self { name, stream }
    }

    /// Returns true for the end-of-table marker
    pub const fn is_end(&self) -> bool {
        self.name.is_empty()
    }
}

impl StreamBinding<'static> {
    /// End-of-table marker
    pub const END: StreamBinding<'static> = StreamBinding {
        name: "",
        stream: &NullStream,
    };
}

impl fmt::Debug for StreamBinding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamBinding")
            .field("name", &self.name)
            .field("stream", &core::ptr::from_ref(self.stream).cast::<()>())
            .finish()
    }
}

/// Number of entries before the end-of-table marker
pub(crate) const fn table_len(streams: &[StreamBinding<'_>]) -> usize {
    let mut len = 0;
    while len < streams.len() && !streams[len].is_end() {
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_len_stops_at_end_marker() {
        let null = NullStream;
        let table = [
            StreamBinding::new("a", &null),
            StreamBinding::new("b", &null),
            StreamBinding::END,
            StreamBinding::new("hidden", &null),
        ];
        assert_eq!(table_len(&table), 2);
        assert_eq!(table_len(&table[..2]), 2);
        assert_eq!(table_len(&[]), 0);
    }
}
