//! The two byte-supplying backends a [`super::SourceStream`] can sit on top of.

use std::io;

/// Capacity of the pull backend's internal fill buffer. Refilled with a
/// single reader call whenever it runs dry.
const READ_BUFFER_CAPACITY: usize = 4096;

/// A `Backend` hands back one byte at a time, or `None` at end of input.
pub(super) enum Backend {
    /// Pulls bytes from a reader callback through a fixed-size fill buffer.
    Pull {
        reader: Box<dyn FnMut(&mut [u8]) -> io::Result<usize>>,
        buf: Vec<u8>,
        pos: usize,
        limit: usize,
    },
    /// Reads directly out of an owned byte buffer.
    Slice { data: Vec<u8>, pos: usize },
}

impl Backend {
    pub(super) fn pull(reader: Box<dyn FnMut(&mut [u8]) -> io::Result<usize>>) -> Self {
        Backend::Pull {
            reader,
            buf: vec![0u8; READ_BUFFER_CAPACITY],
            pos: 0,
            limit: 0,
        }
    }

    pub(super) fn slice(data: Vec<u8>) -> Self {
        Backend::Slice { data, pos: 0 }
    }

    /// Read the next byte, refilling the pull backend's buffer at most
    /// once per call. Returns `Ok(None)` at end of input.
    pub(super) fn read(&mut self) -> io::Result<Option<u8>> {
        match self {
            Backend::Pull {
                reader,
                buf,
                pos,
                limit,
            } => {
                if *pos == *limit {
                    let n = reader(buf)?;
                    if n == 0 {
                        return Ok(None);
                    }
                    *limit = n;
                    *pos = 0;
                }
                let b = buf[*pos];
                *pos += 1;
                Ok(Some(b))
            }
            Backend::Slice { data, pos } => {
                if *pos == data.len() {
                    return Ok(None);
                }
                let b = data[*pos];
                *pos += 1;
                Ok(Some(b))
            }
        }
    }
}
