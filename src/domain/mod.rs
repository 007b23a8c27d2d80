// ============================================================================
// Domain Models Module
// Contains the digit tables, conversion values and configuration
// ============================================================================

pub mod config;
pub mod digit;
pub mod input;

pub use config::{ConverterConfig, DecodeMode, EmptyInputPolicy, EncodingAlgorithmType};
pub use digit::{
    symbol_of, value_of, RomanDigit, DIGITS_DESCENDING, FOUR_REPEATS, VALUES_DESCENDING,
};
pub use input::{Conversion, ConversionInput};
