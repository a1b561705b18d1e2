//! Symbol frequency analysis.
//!
//! Counts how often each character occurs in a source text. Text can be
//! analysed in one shot with [`FrequencyAnalyzer::analyze`], or fed in chunks
//! as it arrives from a reader via [`FrequencyAnalyzer::update`].

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Mapping from source character to occurrence count.
pub type FrequencyTable = HashMap<char, u64>;

/// Accumulating character counter.
#[derive(Debug, Clone, Default)]
pub struct FrequencyAnalyzer {
    counts: FrequencyTable,
    total: u64,
}

impl FrequencyAnalyzer {
    /// Create an analyzer with no counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every character of `text` in a single pass.
    pub fn analyze(text: &str) -> FrequencyTable {
        let mut analyzer = Self::new();
        analyzer.update(text);
        analyzer.finish()
    }

    /// Count every character of `text` using the rayon thread pool.
    ///
    /// Produces the same table as [`FrequencyAnalyzer::analyze`].
    #[cfg(feature = "parallel")]
    pub fn analyze_parallel(text: &str) -> FrequencyTable {
        text.par_chars()
            .fold(FrequencyTable::new, |mut counts, ch| {
                *counts.entry(ch).or_insert(0) += 1;
                counts
            })
            .reduce(FrequencyTable::new, |mut left, right| {
                for (ch, count) in right {
                    *left.entry(ch).or_insert(0) += count;
                }
                left
            })
    }

    /// Add the characters of another chunk of text.
    pub fn update(&mut self, chunk: &str) {
        for ch in chunk.chars() {
            *self.counts.entry(ch).or_insert(0) += 1;
            self.total += 1;
        }
    }

    /// Number of characters counted so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct characters seen so far.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Consume the analyzer and return the table.
    pub fn finish(self) -> FrequencyTable {
        self.counts
    }
}
