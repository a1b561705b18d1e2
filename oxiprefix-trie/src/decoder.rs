//! Prefix-code decoder.
//!
//! [`Decoder`] is the externally visible codec object for decoding. It owns
//! a [`CodeTree`] of characters and reports failures as [`CodecError`],
//! collapsing the trie's empty-code and foreign-character errors into
//! [`CodecError::InvalidCode`].

use crate::tree::CodeTree;
use log::debug;
use oxiprefix_core::{Alphabet, CodeBook, CodecError, Result};

/// Decoder for messages built from prefix codes.
#[derive(Debug, Clone)]
pub struct Decoder {
    /// Code trie.
    tree: CodeTree<char>,
}

impl Decoder {
    /// Create a decoder whose alphabet is the characters of `alphabet`.
    ///
    /// Fails with [`CodecError::EmptyAlphabet`] if `alphabet` has fewer than
    /// two distinct characters.
    pub fn new(alphabet: &str) -> Result<Self> {
        Ok(Self::with_alphabet(Alphabet::try_from(alphabet)?))
    }

    /// Create a decoder over an existing alphabet.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            tree: CodeTree::new(alphabet),
        }
    }

    /// Rebuild a decoder from a persisted code book.
    pub fn from_code_book(book: &CodeBook) -> Result<Self> {
        let mut decoder = Self::new(book.alphabet())?;
        for (symbol, code) in book.iter() {
            decoder.add_code(symbol, code)?;
        }
        debug!(
            "decoder populated with {} codes over alphabet {:?}",
            book.len(),
            book.alphabet()
        );
        Ok(decoder)
    }

    /// The coding alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        self.tree.alphabet()
    }

    /// The underlying code trie.
    pub fn tree(&self) -> &CodeTree<char> {
        &self.tree
    }

    /// Number of stored codes.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check whether no code is stored.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Associate `code` with `symbol`, overwriting on collision.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidCode`] if `code` is empty or contains a character
    /// outside the alphabet.
    pub fn add_code(&mut self, symbol: char, code: &str) -> Result<()> {
        self.tree.add_code(symbol, code).map_err(CodecError::from)
    }

    /// Decode `message` into the symbols it encodes.
    ///
    /// The whole message is checked against the alphabet before decoding
    /// starts.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidCode`] if `message` has a character outside the
    ///   alphabet
    /// - [`CodecError::UndecodableMessage`] if the message does not split
    ///   into stored codes
    pub fn decode(&self, message: &str) -> Result<String> {
        self.tree.check_symbols(message)?;
        let symbols = self.tree.decode(message)?;
        Ok(symbols.into_iter().collect())
    }

    /// Check whether every internal node of the trie is full.
    pub fn is_code_complete(&self) -> bool {
        self.tree.is_complete()
    }

    /// All `(symbol, code)` pairs in alphabet-ordered depth-first order.
    pub fn codes(&self) -> Vec<(char, String)> {
        self.tree.all_codes()
    }

    /// Textual listing of all codes, one `symbol:code` per line.
    pub fn all_codes(&self) -> String {
        self.codes()
            .iter()
            .map(|(symbol, code)| format!("{symbol}:{code}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxiprefix_core::CodingTable;

    #[test]
    fn test_new_rejects_small_alphabet() {
        assert_eq!(
            Decoder::new("1").unwrap_err(),
            CodecError::EmptyAlphabet { distinct: 1 }
        );
        assert!(Decoder::new("01").is_ok());
    }

    #[test]
    fn test_invalid_code() {
        let mut decoder = Decoder::new("01").unwrap();
        assert!(matches!(
            decoder.add_code('a', "031"),
            Err(CodecError::InvalidCode { .. })
        ));
        assert!(matches!(
            decoder.add_code('a', ""),
            Err(CodecError::InvalidCode { .. })
        ));
        assert!(decoder.is_empty());
    }

    #[test]
    fn test_foreign_character_reported_before_undecodable() {
        let mut decoder = Decoder::new("01").unwrap();
        decoder.add_code('a', "00").unwrap();
        // '1' at position 0 has no child, but '2' is checked first
        assert!(matches!(
            decoder.decode("12"),
            Err(CodecError::InvalidCode { .. })
        ));
        assert_eq!(decoder.decode("1"), Err(CodecError::undecodable(0)));
    }

    #[test]
    fn test_all_codes_text() {
        let mut decoder = Decoder::new("01").unwrap();
        decoder.add_code('x', "1").unwrap();
        decoder.add_code('y', "00").unwrap();
        decoder.add_code('z', "01").unwrap();
        assert_eq!(decoder.all_codes(), "y:00\nz:01\nx:1");
        assert!(decoder.is_code_complete());
        assert_eq!(decoder.len(), 3);
    }

    #[test]
    fn test_all_codes_empty() {
        let decoder = Decoder::new("01").unwrap();
        assert_eq!(decoder.all_codes(), "");
    }

    #[test]
    fn test_from_code_book() {
        let mut codes = CodingTable::new();
        codes.insert('h', "0".to_string());
        codes.insert('i', "1".to_string());
        let book = CodeBook::new(&Alphabet::binary(), codes);

        let decoder = Decoder::from_code_book(&book).unwrap();
        assert_eq!(decoder.decode("0110").unwrap(), "hiih");
    }

    #[test]
    fn test_from_code_book_with_bad_alphabet() {
        let book = CodeBook::default();
        assert!(matches!(
            Decoder::from_code_book(&book),
            Err(CodecError::EmptyAlphabet { .. })
        ));
    }
}
