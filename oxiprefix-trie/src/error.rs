//! Trie-specific error types.

use oxiprefix_core::CodecError;
use thiserror::Error;

/// Code trie insertion/decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A code with no characters cannot address a leaf.
    #[error("Empty code")]
    EmptyCode,

    /// A code or message character is not part of the coding alphabet.
    #[error("Character {symbol:?} at position {position} is not in the coding alphabet")]
    InvalidSymbolInCode {
        /// The offending character.
        symbol: char,
        /// Character index within the code or message.
        position: usize,
    },

    /// No branch matches the input, or the input ends mid-code.
    #[error("Undecodable message at position {position}")]
    UndecodableMessage {
        /// Character index where decoding failed.
        position: usize,
    },
}

/// Result type for trie operations.
pub type Result<T> = std::result::Result<T, TreeError>;

impl From<TreeError> for CodecError {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::EmptyCode | TreeError::InvalidSymbolInCode { .. } => {
                CodecError::invalid_code(err.to_string())
            }
            TreeError::UndecodableMessage { position } => CodecError::undecodable(position),
        }
    }
}
