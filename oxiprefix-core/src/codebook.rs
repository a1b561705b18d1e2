//! Code books: the persistable form of a coding table.
//!
//! A code book pairs the coding alphabet with the symbol-to-code mapping so
//! that a decoder can be rebuilt later without rerunning frequency analysis.
//! With the `serde` feature enabled it can be serialized by the caller.

use crate::alphabet::Alphabet;
use std::collections::BTreeMap;

/// Mapping from source symbol to its code over the coding alphabet.
pub type CodingTable = BTreeMap<char, String>;

/// A coding table together with the alphabet its codes are drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeBook {
    /// Coding alphabet characters, in alphabet order.
    alphabet: String,
    /// Symbol to code mapping.
    codes: CodingTable,
}

impl CodeBook {
    /// Create a code book for `alphabet` holding `codes`.
    pub fn new(alphabet: &Alphabet, codes: CodingTable) -> Self {
        Self {
            alphabet: alphabet.to_string(),
            codes,
        }
    }

    /// The alphabet characters as stored.
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// The symbol to code mapping.
    pub fn codes(&self) -> &CodingTable {
        &self.codes
    }

    /// Code assigned to `symbol`, if any.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check whether the book holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }
}
