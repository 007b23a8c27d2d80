// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_converter::prelude::*;
use roman_converter::utils::init_tracing;
use std::sync::Arc;

fn main() {
    init_tracing("roman_converter=debug");

    println!("=== Roman Converter Example ===\n");

    // One-shot conversions with the default configuration
    for input in ["1994", "mcmxciv", "3999", "XLII", ""] {
        match convert(input) {
            Ok(output) => println!("  {:>9?} -> {}", input, output),
            Err(e) => println!("  {:>9?} -> error: {}", input, e),
        }
    }

    // Converter with logging and strict decoding
    println!("\nStrict converter:");
    let converter = ConverterBuilder::strict().build(Arc::new(LoggingEventHandler));

    for input in ["MMXXIV", "IIX", "", "ABC"] {
        match converter.convert(input) {
            Ok(output) => println!("  {:>9?} -> {}", input, output),
            Err(e) => println!("  {:>9?} -> error: {}", input, e),
        }
    }

    // Numeric inputs
    println!("\nNumeric inputs:");
    for value in [1i64, 4, 9, 14, 40, 90, 400, 900, 4000] {
        match converter.convert(value) {
            Ok(output) => println!("  {:>9} -> {}", value, output),
            Err(e) => println!("  {:>9} -> error: {}", value, e),
        }
    }

    // Validated numeral type
    let year: RomanNumeral = "MMXXVI".parse().expect("canonical numeral");
    println!("\n{} is {}", year, year.value());
}
