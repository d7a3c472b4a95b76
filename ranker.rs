use itertools::Itertools;

use crate::counter::FrequencyMap;

/// A character and the number of times it was seen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub ch: char,
    pub count: usize,
}

/// Entries in descending count order plus the summary totals
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Ranking {
    pub entries: Vec<FrequencyEntry>,
    pub unique: usize,
    pub total: usize,
}

/// Sort the map by descending count. Ties are broken by ascending code point
/// so the output is stable across runs.
pub fn rank(freq_map: FrequencyMap) -> Ranking {
    let entries: Vec<FrequencyEntry> = freq_map
        .into_iter()
        .map(|(ch, count)| FrequencyEntry { ch, count })
        .sorted_unstable_by(|a, b| b.count.cmp(&a.count).then(a.ch.cmp(&b.ch)))
        .collect();
    let total = entries.iter().map(|e| e.count).sum();
    Ranking {
        unique: entries.len(),
        total,
        entries,
    }
}
