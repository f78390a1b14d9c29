use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// A half-open byte range [start, end) of the input file, tagged with its
/// position in the partition.
///
/// The index is what lets out-of-order task results be reassembled into
/// file byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpec {
    pub index: usize,
    pub start: u64,
    pub end: u64,
}

impl ChunkSpec {
    /// Length of the range in bytes.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Expand bytes into their binary representation, most-significant bit first.
///
/// The result has exactly 8 characters per input byte, drawn from {'0','1'}.
pub fn expand_bits(bytes: &[u8]) -> String {
    let mut bits = String::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push(if byte >> shift & 1 == 1 { '1' } else { '0' });
        }
    }
    bits
}

/// Read one chunk of a file and convert it to a bit sequence.
///
/// Opens its own handle, seeks to the chunk start, and reads exactly the
/// chunk's byte range; a short read or unreadable range is an I/O error,
/// propagated to the caller. The handle is closed on return.
pub fn read_chunk(path: &Path, chunk: ChunkSpec) -> Result<String> {
    debug!(start = chunk.start, end = chunk.end, "reading file chunk");
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(chunk.start))?;
    let mut buf = vec![0u8; chunk.len() as usize];
    file.read_exact(&mut buf)?;
    let bits = expand_bits(&buf);
    debug!(bytes = buf.len(), bits = bits.len(), "expanded chunk");
    Ok(bits)
}
