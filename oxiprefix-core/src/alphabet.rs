//! Coding alphabets.
//!
//! A coding alphabet is the finite, ordered set of characters that label the
//! edges of a code trie (the "bits" of a code). Position in the alphabet is
//! significant: it fixes the order in which children are visited and which
//! character a Huffman merge assigns to the i-th member of a group.

use crate::error::{CodecError, Result};
use std::fmt;

/// An ordered set of at least two distinct characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Minimum number of distinct characters in a usable alphabet.
    pub const MIN_SIZE: usize = 2;

    /// Build an alphabet from characters in order.
    ///
    /// Repeated characters are collapsed onto their first occurrence.
    /// Fails with [`CodecError::EmptyAlphabet`] when fewer than
    /// [`Alphabet::MIN_SIZE`] distinct characters remain.
    pub fn new<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut distinct: Vec<char> = Vec::new();
        for ch in symbols {
            if !distinct.contains(&ch) {
                distinct.push(ch);
            }
        }

        if distinct.len() < Self::MIN_SIZE {
            return Err(CodecError::empty_alphabet(distinct.len()));
        }

        Ok(Self { symbols: distinct })
    }

    /// The binary alphabet `01`.
    pub fn binary() -> Self {
        Self {
            symbols: vec!['0', '1'],
        }
    }

    /// The lowercase hexadecimal alphabet `0123456789abcdef`.
    pub fn hexadecimal() -> Self {
        Self {
            symbols: "0123456789abcdef".chars().collect(),
        }
    }

    /// Number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet holds at least two characters.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Position of `ch` in the alphabet.
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.symbols.iter().position(|&c| c == ch)
    }

    /// Character at `index`.
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Check whether `ch` belongs to the alphabet.
    pub fn contains(&self, ch: char) -> bool {
        self.symbols.contains(&ch)
    }

    /// Iterate over the characters in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// The characters as a slice, in alphabet order.
    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.symbols {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = CodecError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value.chars())
    }
}
