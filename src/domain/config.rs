// ============================================================================
// Converter Configuration
// Encoder selection and the policies for ambiguous or non-canonical input
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Encoding Algorithm Type
// ============================================================================

/// Defines the Arabic -> Roman encoding algorithm.
///
/// Both produce identical canonical numerals for every value in [1, 3999].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EncodingAlgorithmType {
    /// Greedy walk over a 13-entry table that already contains the
    /// subtractive pairs (900, 400, 90, 40, 9, 4)
    #[default]
    SubtractiveTable,

    /// Greedy walk over the seven plain digits, then rewrite of every
    /// four-repeat run into its subtractive pair
    GreedyRewrite,
}

// ============================================================================
// Input Policies
// ============================================================================

/// What to do with empty text, which vacuously consists of Roman letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmptyInputPolicy {
    /// Decode `""` as the empty numeral, yielding 0
    #[default]
    DecodeAsZero,
    /// Fail with `InvalidFormat`
    Reject,
}

/// How Roman text is checked before it is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecodeMode {
    /// Any sequence of Roman letters decodes by the subtract-if-smaller rule
    /// ("IIX" -> 10, "VX" -> 5)
    #[default]
    Lenient,
    /// Only canonical numerals in [1, 3999] decode; anything else is
    /// `MalformedNumeral`
    Strict,
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for creating a converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Encoder used for Arabic input
    pub encoding_algorithm: EncodingAlgorithmType,

    /// Handling of empty text
    pub empty_input: EmptyInputPolicy,

    /// Handling of non-canonical Roman text
    pub decode_mode: DecodeMode,
}

impl ConverterConfig {
    /// Create a new configuration with required parameters
    pub fn new(encoding_algorithm: EncodingAlgorithmType) -> Self {
        Self {
            encoding_algorithm,
            ..Self::default()
        }
    }

    /// Builder method: Set the empty input policy
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// Builder method: Set the decode mode
    pub fn with_decode_mode(mut self, mode: DecodeMode) -> Self {
        self.decode_mode = mode;
        self
    }

    /// Whether empty text is rejected instead of decoded.
    #[inline]
    pub fn rejects_empty(&self) -> bool {
        self.empty_input == EmptyInputPolicy::Reject
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Behaves exactly like the classic two-phase converter
    /// - Greedy rewrite encoder
    /// - `""` decodes to 0
    /// - Lenient decoding
    pub fn compatible() -> Self {
        Self::new(EncodingAlgorithmType::GreedyRewrite)
    }

    /// Rejects anything that is not a canonical numeral or an in-range number
    /// - Subtractive table encoder
    /// - `""` is a format error
    /// - Strict decoding
    pub fn strict() -> Self {
        Self::new(EncodingAlgorithmType::SubtractiveTable)
            .with_empty_input(EmptyInputPolicy::Reject)
            .with_decode_mode(DecodeMode::Strict)
    }
}
