use std::collections::HashMap;
use rayon::prelude::*;

/// Inputs at least this large (in bytes) are counted on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 1 << 20;
/// Target chunk size for parallel counting; chunks are widened to the next char boundary
pub const CHUNK_BYTES: usize = 256 * 1024;

pub type FrequencyMap = HashMap<char, usize>;

/// Count every code point in `text` in a single pass.
pub fn count_chars(text: &str) -> FrequencyMap {
    let mut freq_map = FrequencyMap::new();
    for c in text.chars() {
        *freq_map.entry(c).or_insert(0) += 1;
    }
    freq_map
}

/// Same result as `count_chars`, but large inputs are split into chunks and
/// counted in parallel.
pub fn count_chars_parallel(text: &str) -> FrequencyMap {
    if text.len() < PARALLEL_THRESHOLD {
        return count_chars(text);
    }
    let chunks = split_chunks(text, CHUNK_BYTES);
    tracing::debug!(chunks = chunks.len(), bytes = text.len(), "counting in parallel");
    chunks
        .par_iter()
        .map(|chunk| count_chars(chunk))
        .reduce(FrequencyMap::new, merge)
}

/// Add the counts of `b` into `a`, always folding the smaller map into the larger.
pub fn merge(mut a: FrequencyMap, mut b: FrequencyMap) -> FrequencyMap {
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }
    for (c, n) in b {
        *a.entry(c).or_insert(0) += n;
    }
    a
}

fn split_chunks(text: &str, size: usize) -> Vec<&str> {
    let mut chunks = Vec::with_capacity(text.len() / size.max(1) + 1);
    let mut rest = text;
    while !rest.is_empty() {
        let mut end = size.max(1).min(rest.len());
        // never split inside a multibyte sequence
        while !rest.is_char_boundary(end) {
            end += 1;
        }
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }
    chunks
}
