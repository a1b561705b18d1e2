//! # OxiPrefix-Trie: Prefix-Code Trie and Decoder
//!
//! This crate stores a mapping from decoded symbols to variable-length codes
//! over an arbitrary coding alphabet, and decodes streams of concatenated
//! codes back into symbols.
//!
//! ## Features
//!
//! - **Any alphabet**: binary, hexadecimal, or any set of two or more chars
//! - **Prefix-free by construction**: leaves and branches are distinct
//!   variants, so a stored code can never be a prefix of another
//! - **Last write wins**: colliding inserts overwrite instead of failing
//! - **Completeness check**: detect tries where some branch is not full
//!
//! ## Example
//!
//! ```rust
//! use oxiprefix_trie::Decoder;
//!
//! let mut decoder = Decoder::new("01").unwrap();
//! decoder.add_code('b', "00").unwrap();
//! decoder.add_code('c', "011").unwrap();
//! decoder.add_code('a', "100").unwrap();
//! decoder.add_code('e', "101").unwrap();
//! decoder.add_code('d', "11").unwrap();
//!
//! assert_eq!(decoder.decode("10010100").unwrap(), "aeb");
//!
//! // "010" is still unassigned
//! assert!(!decoder.is_code_complete());
//! decoder.add_code('\t', "010").unwrap();
//! assert!(decoder.is_code_complete());
//! ```
//!
//! ## Generic Symbols
//!
//! [`CodeTree`] accepts any symbol type; [`Decoder`] is the `char` facade.
//!
//! ```rust
//! use oxiprefix_core::Alphabet;
//! use oxiprefix_trie::CodeTree;
//!
//! let mut tree: CodeTree<u16> = CodeTree::new(Alphabet::hexadecimal());
//! tree.add_code(256, "f0").unwrap();
//! tree.add_code(42, "1").unwrap();
//! assert_eq!(tree.decode("1f01").unwrap(), vec![42, 256, 42]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod error;
mod node;
mod tree;

pub use decoder::Decoder;
pub use error::{Result, TreeError};
pub use node::{Branch, CodeNode};
pub use tree::CodeTree;
