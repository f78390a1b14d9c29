// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parallel file entropy analyzer.
//!
//! Linear pipeline: partition the file into fixed-size byte chunks, expand
//! each chunk to bits on a bounded worker pool, reassemble the results in
//! ascending chunk order, and reduce the combined sequence to symbol
//! probabilities, information content, and Shannon entropy.

pub mod chunk;

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, warn};

pub use chunk::{ChunkSpec, expand_bits, read_chunk};

use crate::error::{Error, Result};
use crate::estimators::approaches::binary::{
    SymbolDistribution, SymbolInformation, calculate_probabilities,
};

/// Default chunk size for parallel reads: 1 MiB.
pub const DEFAULT_CHUNK_SIZE: u64 = 1024 * 1024;

/// Computed measures for one analyzed file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileReport {
    /// Combined bit-sequence length, 8 × file size in bytes.
    pub bits: usize,
    pub probabilities: SymbolDistribution,
    pub information: SymbolInformation,
    /// Shannon entropy in bits per symbol.
    pub entropy: f64,
}

/// Partition `[0, file_size)` into contiguous, non-overlapping chunks of at
/// most `chunk_size` bytes; the final chunk may be shorter.
///
/// An empty file partitions to no chunks. Fails with
/// [`Error::ZeroChunkSize`] when `chunk_size == 0`.
pub fn partition(file_size: u64, chunk_size: u64) -> Result<Vec<ChunkSpec>> {
    if chunk_size == 0 {
        return Err(Error::ZeroChunkSize);
    }
    let num_chunks = file_size.div_ceil(chunk_size) as usize;
    let mut chunks = Vec::with_capacity(num_chunks);
    let mut start = 0u64;
    let mut index = 0usize;
    while start < file_size {
        let end = file_size.min(start + chunk_size);
        chunks.push(ChunkSpec { index, start, end });
        start = end;
        index += 1;
    }
    Ok(chunks)
}

/// Reassemble per-chunk bit sequences into the combined sequence.
///
/// Tasks may complete in any order; sorting by chunk index here is what
/// restores file byte order. The concatenation must never rely on
/// completion order.
pub fn reassemble(mut parts: Vec<(usize, String)>) -> String {
    parts.sort_by_key(|(index, _)| *index);
    let total: usize = parts.iter().map(|(_, bits)| bits.len()).sum();
    let mut combined = String::with_capacity(total);
    for (_, bits) in parts {
        combined.push_str(&bits);
    }
    combined
}

/// Run one chunk-read task per chunk on a bounded worker pool and gather
/// `(chunk index, bit sequence)` pairs.
///
/// The pool is sized to the host's available parallelism. All tasks are
/// awaited; the first failing task's error is surfaced. If the pool cannot
/// be built, the chunks are processed sequentially in order.
fn dispatch(path: &Path, chunks: &[ChunkSpec]) -> Result<Vec<(usize, String)>> {
    let thread_count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let run = |chunk: &ChunkSpec| read_chunk(path, *chunk).map(|bits| (chunk.index, bits));

    if thread_count > 1 && chunks.len() > 1 {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
        {
            Ok(pool) => pool.install(|| chunks.par_iter().map(run).collect::<Result<Vec<_>>>()),
            Err(err) => {
                warn!(error = %err, "failed to build worker pool, falling back to sequential reads");
                chunks.iter().map(run).collect()
            }
        }
    } else {
        chunks.iter().map(run).collect()
    }
}

/// Analyze a file: partition, parallel bit expansion, ordered reassembly,
/// and entropy reduction over the combined bit sequence.
///
/// # Errors
///
/// Propagates I/O errors from the metadata query and from any chunk read,
/// [`Error::ZeroChunkSize`] for a zero chunk size, and
/// [`Error::EmptySequence`] for an empty file.
pub fn analyze_file(path: &Path, chunk_size: u64) -> Result<FileReport> {
    let file_size = fs::metadata(path)?.len();
    let chunks = partition(file_size, chunk_size)?;
    debug!(file_size, num_chunks = chunks.len(), "partitioned input file");

    let parts = dispatch(path, &chunks)?;
    let combined = reassemble(parts);
    debug!(bits = combined.len(), "combined binary sequence");

    let probabilities = calculate_probabilities(&combined)?;
    Ok(FileReport {
        bits: combined.len(),
        probabilities,
        information: probabilities.information_content(),
        entropy: probabilities.entropy(),
    })
}
