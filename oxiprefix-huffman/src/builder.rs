//! n-ary Huffman code construction.
//!
//! The builder repeatedly takes the lowest-priority group of queue entries,
//! assigns alphabet character `i` to the `i`-th entry of the group, and
//! pushes the merged group back. Codes are therefore assembled from the
//! leaves towards the root: each round prepends one character to the code of
//! every source character in the group.
//!
//! Priority is ascending frequency with ties broken by ascending label, so
//! the output is fully deterministic for a given table and alphabet.

use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use log::{debug, trace};
use oxiprefix_core::{Alphabet, CodingTable, MergeStrategy};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Builder for coding tables from symbol frequencies.
#[derive(Debug, Clone)]
pub struct HuffmanBuilder {
    alphabet: Alphabet,
    merge: MergeStrategy,
}

impl HuffmanBuilder {
    /// Create a builder for `alphabet` using `merge` grouping.
    pub fn new(alphabet: Alphabet, merge: MergeStrategy) -> Self {
        Self { alphabet, merge }
    }

    /// The coding alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The merge grouping.
    pub fn merge_strategy(&self) -> MergeStrategy {
        self.merge
    }

    /// Build a code for every character of `frequencies`.
    ///
    /// An empty table yields an empty mapping. A single character gets the
    /// one-character code made of the first alphabet character.
    pub fn build(&self, frequencies: &FrequencyTable) -> CodingTable {
        if frequencies.len() < 2 {
            return frequencies
                .keys()
                .zip(self.alphabet.iter())
                .map(|(&ch, edge)| (ch, edge.to_string()))
                .collect();
        }

        let arity = self.alphabet.len();
        let mut queue: BinaryHeap<Reverse<Symbol>> = frequencies
            .iter()
            .map(|(&ch, &frequency)| Reverse(Symbol::leaf(ch, frequency)))
            .collect();

        if self.merge == MergeStrategy::Padded {
            let padding = Self::padding(queue.len(), arity);
            trace!("padding merge queue with {padding} placeholders");
            for _ in 0..padding {
                queue.push(Reverse(Symbol::placeholder()));
            }
        }

        // Codes grow at the front, so collect them back to front
        let mut reversed: HashMap<char, Vec<char>> = HashMap::with_capacity(frequencies.len());
        let mut group: Vec<Symbol> = Vec::with_capacity(arity);
        let mut round = 0usize;

        while queue.len() > 1 {
            group.clear();
            while group.len() < arity {
                match queue.pop() {
                    Some(Reverse(symbol)) => group.push(symbol),
                    None => break,
                }
            }

            for (symbol, edge) in group.iter().zip(self.alphabet.iter()) {
                for ch in symbol.label().chars() {
                    reversed.entry(ch).or_default().push(edge);
                }
            }

            let merged = Symbol::merge(&group);
            trace!(
                "merge round {round}: {} entries -> {:?} (frequency {})",
                group.len(),
                merged.label(),
                merged.frequency()
            );
            queue.push(Reverse(merged));
            round += 1;
        }

        let table: CodingTable = reversed
            .into_iter()
            .map(|(ch, edges)| (ch, edges.into_iter().rev().collect::<String>()))
            .collect();

        debug!(
            "built {} codes over a {}-character alphabet in {round} rounds",
            table.len(),
            arity
        );
        table
    }

    /// Frequency-weighted mean code length of `table`, in alphabet characters.
    ///
    /// Characters missing from `table` are ignored. Returns 0.0 when nothing
    /// is coded.
    pub fn average_code_length(frequencies: &FrequencyTable, table: &CodingTable) -> f64 {
        let (weighted, total) = frequencies
            .iter()
            .filter_map(|(ch, &frequency)| {
                table
                    .get(ch)
                    .map(|code| (frequency * code.chars().count() as u64, frequency))
            })
            .fold((0u64, 0u64), |(w, t), (cw, cf)| (w + cw, t + cf));

        if total == 0 {
            0.0
        } else {
            weighted as f64 / total as f64
        }
    }

    /// Placeholders needed so that every round merges exactly `arity` entries.
    fn padding(symbols: usize, arity: usize) -> usize {
        let step = arity - 1;
        (step - (symbols - 1) % step) % step
    }
}
