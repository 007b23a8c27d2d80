// ============================================================================
// Roman Converter Library
// Bidirectional Arabic <-> Roman numeral conversion for values 1 to 3999
// ============================================================================

//! # Roman Converter
//!
//! Converts decimal integers to canonical Roman numerals and back.
//!
//! ## Features
//!
//! - **One entry point** that classifies its input and picks the direction
//! - **Two interchangeable encoders** (subtractive table, greedy rewrite)
//! - **Lenient or strict decoding** of Roman text
//! - **Validated numeral type** with `Display` / `FromStr`
//! - **Event hooks** for logging and auditing conversions
//!
//! ## Example
//!
//! ```rust
//! use roman_converter::prelude::*;
//!
//! assert_eq!(convert(1994), Ok(Conversion::Roman("MCMXCIV".to_string())));
//! assert_eq!(convert("mcmxciv"), Ok(Conversion::Arabic(1994)));
//! assert_eq!(convert("2023"), Ok(Conversion::Roman("MMXXIII".to_string())));
//! assert_eq!(convert(4000), Err(ConversionError::InvalidFormat));
//!
//! let numeral: RomanNumeral = "XLII".parse().unwrap();
//! assert_eq!(numeral.value(), 42);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

use domain::{Conversion, ConversionInput};
use engine::{decoder, Converter, SubtractiveTable};
use interfaces::EncodingAlgorithm;
use numeric::{ConversionResult, RomanNumeral};

/// Convert with the default configuration.
///
/// Returns a Roman numeral for Arabic input in [1, 3999] and an integer for
/// Roman text. Empty text decodes to 0.
///
/// # Errors
/// Returns `InvalidFormat` for anything else.
pub fn convert(input: impl Into<ConversionInput>) -> ConversionResult<Conversion> {
    Converter::default().convert(input)
}

/// Canonical Roman numeral for a validated value.
pub fn encode(numeral: RomanNumeral) -> String {
    SubtractiveTable.encode(numeral)
}

/// Lenient decode of Roman text, case-insensitive.
///
/// # Errors
/// Returns `InvalidDigit` for characters other than M, D, C, L, X, V, I.
pub fn decode(numeral: &str) -> ConversionResult<i64> {
    decoder::decode_lenient(numeral)
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Conversion, ConversionInput, ConverterConfig, DecodeMode, EmptyInputPolicy,
        EncodingAlgorithmType, RomanDigit,
    };
    pub use crate::engine::{
        create_from_config, is_arabic_numeral, is_roman_numeral, Converter, ConverterBuilder,
        GreedyRewrite, SubtractiveTable,
    };
    pub use crate::interfaces::{
        ConversionEvent, EncodingAlgorithm, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{ConversionError, ConversionResult, RomanNumeral};
    pub use crate::{convert, decode, encode};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_conversion() {
        let cases = [
            (1, "I"),
            (4, "IV"),
            (9, "IX"),
            (40, "XL"),
            (90, "XC"),
            (400, "CD"),
            (900, "CM"),
            (1994, "MCMXCIV"),
            (3999, "MMMCMXCIX"),
        ];

        for (value, roman) in cases {
            assert_eq!(convert(value), Ok(Conversion::Roman(roman.to_string())));
            assert_eq!(convert(roman), Ok(Conversion::Arabic(i64::from(value))));
            assert_eq!(
                convert(roman.to_lowercase()),
                Ok(Conversion::Arabic(i64::from(value)))
            );
        }
    }

    #[test]
    fn test_edge_inputs() {
        assert_eq!(convert(0), Err(ConversionError::InvalidFormat));
        assert_eq!(convert(4000), Err(ConversionError::InvalidFormat));
        assert_eq!(convert("ABC"), Err(ConversionError::InvalidFormat));
        // Empty text is vacuously Roman and decodes to 0 by default
        assert_eq!(convert(""), Ok(Conversion::Arabic(0)));
    }

    #[test]
    fn test_numeric_string_is_arabic() {
        let input = ConversionInput::from("2023");
        assert!(is_arabic_numeral(&input));
        assert!(!is_roman_numeral(&input));
        assert_eq!(convert(input), Ok(Conversion::Roman("MMXXIII".to_string())));
    }

    #[test]
    fn test_strict_converter() {
        let converter = ConverterBuilder::strict().build(Arc::new(LoggingEventHandler));
        assert_eq!(converter.convert(""), Err(ConversionError::InvalidFormat));
        assert_eq!(converter.convert("VX"), Err(ConversionError::MalformedNumeral));
        assert_eq!(converter.convert("MMXXIV"), Ok(Conversion::Arabic(2024)));
    }

    #[test]
    fn test_free_functions() {
        let numeral = RomanNumeral::new(2024).unwrap();
        assert_eq!(encode(numeral), "MMXXIV");
        assert_eq!(decode("MMXXIV"), Ok(2024));
        assert_eq!(decode("mmxxiv"), Ok(2024));
    }

    proptest! {
        #[test]
        fn prop_round_trip(value in 1u16..=3999) {
            let numeral = RomanNumeral::new(value).unwrap();
            prop_assert_eq!(decode(&encode(numeral)), Ok(i64::from(value)));
        }

        #[test]
        fn prop_encoders_agree(value in 1u16..=3999) {
            let numeral = RomanNumeral::new(value).unwrap();
            prop_assert_eq!(GreedyRewrite.encode(numeral), SubtractiveTable.encode(numeral));
        }

        #[test]
        fn prop_convert_round_trip(value in 1i64..=3999) {
            let roman = convert(value).unwrap();
            let back = convert(roman.as_roman().unwrap()).unwrap();
            prop_assert_eq!(back, Conversion::Arabic(value));
        }

        #[test]
        fn prop_out_of_range_rejected(value in prop_oneof![i64::MIN..=0, 4000i64..=i64::MAX]) {
            prop_assert_eq!(convert(value), Err(ConversionError::InvalidFormat));
            prop_assert_eq!(convert(value.to_string()), Err(ConversionError::InvalidFormat));
        }
    }
}
