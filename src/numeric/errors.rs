// ============================================================================
// Conversion Errors
// Error types for numeral classification, encoding and decoding
// ============================================================================

use std::fmt;

/// Errors that can occur while converting between Arabic and Roman numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// Input is neither an in-range Arabic numeral nor a Roman-letter string
    InvalidFormat,
    /// Value lies outside the representable range [1, 3999]
    OutOfRange,
    /// Character is not one of M, D, C, L, X, V, I
    InvalidDigit(char),
    /// Roman numeral is not in canonical form (strict decoding only)
    MalformedNumeral,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidFormat => write!(f, "wrong input format"),
            ConversionError::OutOfRange => {
                write!(f, "value out of range: roman numerals cover 1 to 3999")
            },
            ConversionError::InvalidDigit(c) => write!(f, "invalid roman digit: {:?}", c),
            ConversionError::MalformedNumeral => {
                write!(f, "malformed roman numeral: not in canonical form")
            },
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
