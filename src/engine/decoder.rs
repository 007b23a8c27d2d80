// ============================================================================
// Roman Decoder
// Single left-to-right pass with one digit of lookahead
// ============================================================================

use crate::domain::RomanDigit;
use crate::engine::subtractive_table;
use crate::numeric::{ConversionError, ConversionResult, RomanNumeral};
use smallvec::SmallVec;

type DigitBuf = SmallVec<[RomanDigit; 16]>;

/// Parse Roman text into digits, case-insensitively.
///
/// # Errors
/// Returns `InvalidDigit` for the first character that is not a Roman letter.
pub fn parse_digits(numeral: &str) -> ConversionResult<DigitBuf> {
    numeral
        .to_uppercase()
        .chars()
        .map(RomanDigit::try_from)
        .collect()
}

/// Sum of a digit sequence: a digit is subtracted when the next one is larger,
/// otherwise added. No well-formedness check ("IIX" is 10, "VX" is 5).
pub fn sum_digits(digits: &[RomanDigit]) -> i64 {
    digits
        .iter()
        .enumerate()
        .map(|(i, &digit)| {
            let value = i64::from(digit.value());
            let next = digits.get(i + 1).copied().unwrap_or(digit);
            if digit.value() >= next.value() {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// Decode any string of Roman letters. The empty string decodes to 0.
///
/// # Errors
/// Returns `InvalidDigit` if a character is not a Roman letter.
pub fn decode_lenient(numeral: &str) -> ConversionResult<i64> {
    parse_digits(numeral).map(|digits| sum_digits(&digits))
}

/// Decode a canonical numeral only.
///
/// # Errors
/// - `InvalidDigit` if a character is not a Roman letter
/// - `OutOfRange` if the value falls outside [1, 3999] (including `""`)
/// - `MalformedNumeral` if the text is not the canonical spelling of its value
pub fn decode_strict(numeral: &str) -> ConversionResult<RomanNumeral> {
    let digits = parse_digits(numeral)?;
    let value = RomanNumeral::try_from(sum_digits(&digits))?;

    if subtractive_table::encode_digits(value).as_slice() != digits.as_slice() {
        return Err(ConversionError::MalformedNumeral);
    }

    Ok(value)
}
