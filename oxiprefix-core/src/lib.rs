//! # OxiPrefix Core
//!
//! Core components for the OxiPrefix prefix-code library.
//!
//! This crate provides the building blocks shared by the codec crates:
//!
//! - [`alphabet`]: Coding alphabets (the edge labels of a code trie)
//! - [`codebook`]: Coding tables and their persistable form
//! - [`config`]: Merge and unmapped-symbol policies
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiPrefix is designed as a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Code Construction (oxiprefix-huffman)               │
//! │     FrequencyAnalyzer, n-ary HuffmanBuilder, Encoder    │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Prefix Trie (oxiprefix-trie)                        │
//! │     CodeNode, CodeTree, streaming Decoder               │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     Alphabet, CodeBook, CodecConfig, CodecError         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiprefix_core::{Alphabet, CodeBook, CodingTable};
//!
//! let alphabet = Alphabet::try_from("01").unwrap();
//! assert_eq!(alphabet.index_of('1'), Some(1));
//!
//! let mut codes = CodingTable::new();
//! codes.insert('a', "0".to_string());
//! codes.insert('b', "1".to_string());
//! let book = CodeBook::new(&alphabet, codes);
//! assert_eq!(book.get('b'), Some("1"));
//!
//! // Alphabets need at least two distinct characters
//! assert!(Alphabet::try_from("0").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod codebook;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use alphabet::Alphabet;
pub use codebook::{CodeBook, CodingTable};
pub use config::{CodecConfig, MergeStrategy, UnmappedPolicy};
pub use error::{CodecError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::alphabet::Alphabet;
    pub use crate::codebook::{CodeBook, CodingTable};
    pub use crate::config::{CodecConfig, MergeStrategy, UnmappedPolicy};
    pub use crate::error::{CodecError, Result};
}
