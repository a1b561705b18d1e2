//! Codec configuration.

/// How the Huffman builder groups symbols on each merge round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// Pop up to `|alphabet|` symbols per round with no padding.
    ///
    /// The final round may merge fewer symbols than the alphabet size,
    /// which leaves the tree incomplete and can be suboptimal for
    /// alphabets larger than two.
    #[default]
    Greedy,
    /// Seed zero-frequency placeholders so that every round merges exactly
    /// `|alphabet|` symbols (standard n-ary Huffman).
    ///
    /// Placeholders never receive a code, so the slots they occupied stay
    /// vacant in the resulting trie.
    Padded,
}

/// What the encoder does with a source character that has no code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappedPolicy {
    /// Drop the character from the output.
    #[default]
    Skip,
    /// Fail with `CodecError::UnmappedSymbol`.
    Reject,
}

/// Codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Merge grouping used when building codes.
    pub merge: MergeStrategy,
    /// Handling of characters missing from the coding table.
    pub unmapped: UnmappedPolicy,
}

impl CodecConfig {
    /// Classic configuration.
    ///
    /// - Greedy merge, final group may be short
    /// - Unmapped characters are skipped
    pub const CLASSIC: Self = Self {
        merge: MergeStrategy::Greedy,
        unmapped: UnmappedPolicy::Skip,
    };

    /// Strict configuration.
    ///
    /// - Padded merge, optimal n-ary code lengths
    /// - Unmapped characters are an error
    pub const STRICT: Self = Self {
        merge: MergeStrategy::Padded,
        unmapped: UnmappedPolicy::Reject,
    };

    /// Create a new codec configuration.
    pub fn new(merge: MergeStrategy, unmapped: UnmappedPolicy) -> Self {
        Self { merge, unmapped }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_config() {
        let config = CodecConfig::CLASSIC;
        assert_eq!(config.merge, MergeStrategy::Greedy);
        assert_eq!(config.unmapped, UnmappedPolicy::Skip);
        assert_eq!(CodecConfig::default(), config);
    }

    #[test]
    fn test_strict_config() {
        let config = CodecConfig::STRICT;
        assert_eq!(config.merge, MergeStrategy::Padded);
        assert_eq!(config.unmapped, UnmappedPolicy::Reject);
    }
}
