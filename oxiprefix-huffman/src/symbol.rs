//! Merge-queue entries.

use std::cmp::Ordering;

/// A (label, frequency) pair in the Huffman merge queue.
///
/// The label is the concatenation of every source character merged into
/// this entry. Placeholders used for padding have an empty label and zero
/// frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    label: String,
    frequency: u64,
}

impl Symbol {
    /// A queue entry for a single source character.
    pub fn leaf(ch: char, frequency: u64) -> Self {
        Self {
            label: ch.to_string(),
            frequency,
        }
    }

    /// A zero-frequency entry that stands for no source character.
    pub fn placeholder() -> Self {
        Self {
            label: String::new(),
            frequency: 0,
        }
    }

    /// Merge `group` (in pop order) into one entry.
    pub fn merge(group: &[Symbol]) -> Self {
        Self {
            label: group.iter().map(|s| s.label.as_str()).collect(),
            frequency: group.iter().map(|s| s.frequency).sum(),
        }
    }

    /// Concatenated source characters.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Combined occurrence count.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }
}

/// Ascending frequency, ties broken by ascending label.
impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Symbol::leaf('z', 1) < Symbol::leaf('a', 2));
        assert!(Symbol::leaf('a', 3) < Symbol::leaf('b', 3));
        assert!(Symbol::placeholder() < Symbol::leaf('a', 0));
    }

    #[test]
    fn test_merge() {
        let merged = Symbol::merge(&[
            Symbol::placeholder(),
            Symbol::leaf('c', 1),
            Symbol::leaf('a', 4),
        ]);
        assert_eq!(merged.label(), "ca");
        assert_eq!(merged.frequency(), 5);
    }
}
