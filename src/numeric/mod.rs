// ============================================================================
// Numeric Module
// Validated Roman numeral values and conversion errors
// ============================================================================
//
// This module provides:
// - RomanNumeral: integer in [1, 3999] that formats as a canonical numeral
// - ConversionError: error kinds shared by the classifier, codecs and facade
//
// Design principles:
// - Range is checked once, at construction
// - All fallible operations return Result (no panics)
// - Formatting and parsing are exact inverses

mod errors;
mod roman_numeral;

pub use errors::{ConversionError, ConversionResult};
pub use roman_numeral::{RomanNumeral, MAX_NUMERAL_LEN};
