//! Frequency-driven encoder.
//!
//! [`Encoder::encode`] analyses the source text, builds a coding table for
//! it, keeps that table, and returns the text mapped through it. The table
//! can then be handed to a [`Decoder`] to invert the encoding.

use crate::builder::HuffmanBuilder;
use crate::frequency::FrequencyAnalyzer;
use log::{debug, trace};
use oxiprefix_core::{
    Alphabet, CodeBook, CodecConfig, CodecError, CodingTable, Result, UnmappedPolicy,
};
use oxiprefix_trie::Decoder;

/// Encoder that derives its coding table from the text it encodes.
#[derive(Debug, Clone)]
pub struct Encoder {
    /// Coding alphabet.
    alphabet: Alphabet,
    /// Merge and unmapped-symbol policies.
    config: CodecConfig,
    /// Table built by the last `encode` call.
    table: CodingTable,
}

impl Encoder {
    /// Create an encoder whose alphabet is the characters of `alphabet`.
    ///
    /// Fails with [`CodecError::EmptyAlphabet`] if `alphabet` has fewer than
    /// two distinct characters.
    pub fn new(alphabet: &str) -> Result<Self> {
        Ok(Self::with_alphabet(Alphabet::try_from(alphabet)?))
    }

    /// Create an encoder over an existing alphabet with the classic config.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self::with_config(alphabet, CodecConfig::default())
    }

    /// Create an encoder with explicit configuration.
    pub fn with_config(alphabet: Alphabet, config: CodecConfig) -> Self {
        Self {
            alphabet,
            config,
            table: CodingTable::new(),
        }
    }

    /// The coding alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The codec configuration.
    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Encode `source_text` with a table built from its own frequencies.
    ///
    /// The table replaces any previously built one. Characters without a
    /// code are skipped.
    pub fn encode(&mut self, source_text: &str) -> String {
        #[cfg(feature = "parallel")]
        let frequencies = FrequencyAnalyzer::analyze_parallel(source_text);
        #[cfg(not(feature = "parallel"))]
        let frequencies = FrequencyAnalyzer::analyze(source_text);

        self.table = HuffmanBuilder::new(self.alphabet.clone(), self.config.merge).build(&frequencies);
        debug!(
            "coding table rebuilt: {} symbols, mean code length {:.3}",
            self.table.len(),
            HuffmanBuilder::average_code_length(&frequencies, &self.table)
        );

        source_text
            .chars()
            .filter_map(|ch| self.table.get(&ch))
            .map(String::as_str)
            .collect()
    }

    /// Encode `text` with the table from the last [`Encoder::encode`] call.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnmappedSymbol`] for a character without a code when the
    /// configuration uses [`UnmappedPolicy::Reject`].
    pub fn encode_with_table(&self, text: &str) -> Result<String> {
        let mut output = String::new();
        for ch in text.chars() {
            match (self.table.get(&ch), self.config.unmapped) {
                (Some(code), _) => output.push_str(code),
                (None, UnmappedPolicy::Skip) => trace!("skipping unmapped symbol {ch:?}"),
                (None, UnmappedPolicy::Reject) => return Err(CodecError::unmapped_symbol(ch)),
            }
        }
        Ok(output)
    }

    /// The table built by the last `encode` call; empty before the first.
    pub fn coding_table(&self) -> &CodingTable {
        &self.table
    }

    /// The current table paired with the alphabet, for persistence.
    pub fn code_book(&self) -> CodeBook {
        CodeBook::new(&self.alphabet, self.table.clone())
    }

    /// A decoder populated with the current table.
    pub fn decoder(&self) -> Result<Decoder> {
        let mut decoder = Decoder::with_alphabet(self.alphabet.clone());
        for (&symbol, code) in &self.table {
            decoder.add_code(symbol, code)?;
        }
        Ok(decoder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxiprefix_core::MergeStrategy;

    #[test]
    fn test_table_empty_before_encode() {
        let encoder = Encoder::new("01").unwrap();
        assert!(encoder.coding_table().is_empty());
        assert!(encoder.code_book().is_empty());
    }

    #[test]
    fn test_new_rejects_small_alphabet() {
        assert_eq!(
            Encoder::new("").unwrap_err(),
            CodecError::EmptyAlphabet { distinct: 0 }
        );
    }

    #[test]
    fn test_encode_abracadabra() {
        let mut encoder = Encoder::new("01").unwrap();
        let encoded = encoder.encode("abracadabra");
        // a=0 b=110 r=10 c=1110 d=1111
        assert_eq!(encoded, "01101001110011110110100");
        assert_eq!(encoder.coding_table().len(), 5);
    }

    #[test]
    fn test_encode_empty() {
        let mut encoder = Encoder::new("01").unwrap();
        assert_eq!(encoder.encode(""), "");
        assert!(encoder.coding_table().is_empty());
    }

    #[test]
    fn test_encode_replaces_table() {
        let mut encoder = Encoder::new("01").unwrap();
        encoder.encode("abc");
        encoder.encode("xy");
        let symbols: Vec<char> = encoder.coding_table().keys().copied().collect();
        assert_eq!(symbols, vec!['x', 'y']);
    }

    #[test]
    fn test_encode_single_symbol() {
        let mut encoder = Encoder::new("01").unwrap();
        assert_eq!(encoder.encode("zzz"), "000");
        assert_eq!(encoder.decoder().unwrap().decode("000").unwrap(), "zzz");
    }

    #[test]
    fn test_encode_with_table_skip() {
        let mut encoder = Encoder::new("01").unwrap();
        encoder.encode("ab");
        assert_eq!(encoder.encode_with_table("a?b").unwrap(), "01");
    }

    #[test]
    fn test_encode_with_table_reject() {
        let config = CodecConfig::new(MergeStrategy::Greedy, UnmappedPolicy::Reject);
        let mut encoder = Encoder::with_config(Alphabet::binary(), config);
        encoder.encode("ab");
        assert_eq!(encoder.encode_with_table("ba").unwrap(), "10");
        assert_eq!(
            encoder.encode_with_table("a?b"),
            Err(CodecError::UnmappedSymbol { symbol: '?' })
        );
    }

    #[test]
    fn test_decoder_roundtrip() {
        let mut encoder = Encoder::with_config(Alphabet::hexadecimal(), CodecConfig::STRICT);
        let text = "hexadecimal alphabets give short codes";
        let encoded = encoder.encode(text);
        let decoder = encoder.decoder().unwrap();
        assert_eq!(decoder.decode(&encoded).unwrap(), text);
    }
}
