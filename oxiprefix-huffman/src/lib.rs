//! # OxiPrefix-Huffman: n-ary Huffman Code Construction
//!
//! This crate derives prefix codes over an arbitrary coding alphabet from
//! the character frequencies of a source text, and encodes text with them.
//!
//! ## Features
//!
//! - **n-ary codes**: any alphabet of two or more characters, not only bits
//! - **Deterministic**: ties are broken by label, so a text and alphabet
//!   always give the same table
//! - **Two merge strategies**: greedy (short final group) or padded
//!   (standard optimal n-ary Huffman)
//! - **Parallel counting**: `parallel` feature counts frequencies with rayon
//!
//! ## Example
//!
//! ```rust
//! use oxiprefix_huffman::Encoder;
//!
//! let mut encoder = Encoder::new("01").unwrap();
//! let encoded = encoder.encode("abracadabra");
//!
//! // 'a' is the most frequent character and gets the shortest code
//! assert_eq!(encoder.coding_table()[&'a'], "0");
//!
//! // Round trip through a decoder built from the same table
//! let decoder = encoder.decoder().unwrap();
//! assert_eq!(decoder.decode(&encoded).unwrap(), "abracadabra");
//! ```
//!
//! ## Building Tables Directly
//!
//! ```rust
//! use oxiprefix_core::{Alphabet, MergeStrategy};
//! use oxiprefix_huffman::{FrequencyAnalyzer, HuffmanBuilder};
//!
//! let frequencies = FrequencyAnalyzer::analyze("abcd");
//! let ternary = Alphabet::try_from("012").unwrap();
//!
//! let table = HuffmanBuilder::new(ternary, MergeStrategy::Padded).build(&frequencies);
//! assert_eq!(table[&'c'], "0");
//! assert_eq!(table[&'a'], "21");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod builder;
mod encoder;
mod frequency;
mod symbol;

use oxiprefix_core::{Alphabet, CodingTable, MergeStrategy};

pub use builder::HuffmanBuilder;
pub use encoder::Encoder;
pub use frequency::{FrequencyAnalyzer, FrequencyTable};
pub use symbol::Symbol;

/// Build a coding table for `text` over `alphabet` with greedy merging.
///
/// # Example
///
/// ```rust
/// use oxiprefix_core::Alphabet;
/// use oxiprefix_huffman::coding_table;
///
/// let table = coding_table("aab", &Alphabet::binary());
/// assert_eq!(table[&'b'], "0");
/// assert_eq!(table[&'a'], "1");
/// ```
pub fn coding_table(text: &str, alphabet: &Alphabet) -> CodingTable {
    let frequencies = FrequencyAnalyzer::analyze(text);
    HuffmanBuilder::new(alphabet.clone(), MergeStrategy::Greedy).build(&frequencies)
}
