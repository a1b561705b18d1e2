//! Error types for OxiPrefix operations.
//!
//! All codec failures are local, recoverable conditions reported as values.
//! Nothing here is fatal to the process; retry policy belongs to the caller.

use thiserror::Error;

/// The main error type for OxiPrefix operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A code or message contains a character outside the coding alphabet,
    /// or a code is empty.
    #[error("Invalid code: {message}")]
    InvalidCode {
        /// Description of what made the code invalid.
        message: String,
    },

    /// Decoding hit a character with no matching branch, or the input ended
    /// in the middle of a code.
    #[error("Undecodable message at position {position}")]
    UndecodableMessage {
        /// Character index where decoding failed.
        position: usize,
    },

    /// The coding alphabet has fewer than two distinct characters.
    #[error("Coding alphabet needs at least 2 distinct characters, found {distinct}")]
    EmptyAlphabet {
        /// Number of distinct characters supplied.
        distinct: usize,
    },

    /// A source character has no entry in the coding table.
    #[error("Symbol {symbol:?} has no code in the coding table")]
    UnmappedSymbol {
        /// The unmapped source character.
        symbol: char,
    },
}

/// Result type alias for OxiPrefix operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create an invalid code error.
    pub fn invalid_code(message: impl Into<String>) -> Self {
        Self::InvalidCode {
            message: message.into(),
        }
    }

    /// Create an undecodable message error.
    pub fn undecodable(position: usize) -> Self {
        Self::UndecodableMessage { position }
    }

    /// Create an empty alphabet error.
    pub fn empty_alphabet(distinct: usize) -> Self {
        Self::EmptyAlphabet { distinct }
    }

    /// Create an unmapped symbol error.
    pub fn unmapped_symbol(symbol: char) -> Self {
        Self::UnmappedSymbol { symbol }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::invalid_code("character '3' is not in alphabet \"01\"");
        assert!(err.to_string().contains("Invalid code"));
        assert!(err.to_string().contains("'3'"));

        let err = CodecError::undecodable(7);
        assert!(err.to_string().contains("position 7"));

        let err = CodecError::empty_alphabet(1);
        assert!(err.to_string().contains("found 1"));

        let err = CodecError::unmapped_symbol('z');
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CodecError::undecodable(3), CodecError::undecodable(3));
        assert_ne!(CodecError::undecodable(3), CodecError::undecodable(4));
    }
}
