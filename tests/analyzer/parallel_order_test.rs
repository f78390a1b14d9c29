use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use rayon::prelude::*;

use bitmeasure::analyzer::{partition, read_chunk, reassemble};

use crate::test_helpers::{expand_reference, generate_random_bytes, write_scratch_file};

/// Gather chunk results in completion order with inverse-index delays, so
/// late-submitted chunks finish first. The combined sequence must still
/// come out in file byte order.
#[test]
fn reassembly_is_independent_of_completion_order() {
    let bytes = generate_random_bytes(512, 3);
    let file = write_scratch_file(&bytes);
    let chunks = partition(bytes.len() as u64, 32).unwrap();
    assert!(chunks.len() > 2);

    let collected = Mutex::new(Vec::with_capacity(chunks.len()));
    chunks.par_iter().for_each(|chunk| {
        let delay = (chunks.len() - chunk.index) as u64;
        thread::sleep(Duration::from_millis(delay * 2));
        let bits = read_chunk(file.path(), *chunk).unwrap();
        collected.lock().unwrap().push((chunk.index, bits));
    });

    let parts = collected.into_inner().unwrap();
    assert_eq!(reassemble(parts), expand_reference(&bytes));
}

#[test]
fn shuffled_parts_reassemble_in_ascending_order() {
    let bytes = generate_random_bytes(96, 9);
    let chunks = partition(bytes.len() as u64, 16).unwrap();

    // Hand-build parts in reverse completion order.
    let mut parts: Vec<(usize, String)> = chunks
        .iter()
        .map(|chunk| {
            let range = chunk.start as usize..chunk.end as usize;
            (chunk.index, expand_reference(&bytes[range]))
        })
        .collect();
    parts.reverse();

    assert_eq!(reassemble(parts), expand_reference(&bytes));
}
