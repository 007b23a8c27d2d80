// ============================================================================
// Input Classifier
// Decides whether raw input reads as an Arabic or a Roman numeral
// ============================================================================

use crate::domain::{ConversionInput, RomanDigit};
use rust_decimal::prelude::ToPrimitive;

/// How a raw input will be interpreted by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Integer in [1, 3999], ready for encoding
    Arabic(i64),
    /// Text made only of Roman letters
    Roman,
    /// Neither of the above
    Invalid,
}

/// Classify an input the way the converter dispatches it.
///
/// Arabic wins over Roman, so `""` (which coerces to 0, out of range, and is
/// also vacuously Roman) classifies as `Roman`.
pub fn classify(input: &ConversionInput) -> InputKind {
    match arabic_value(input) {
        Some(value) if (1..=3999).contains(&value) => InputKind::Arabic(value),
        _ if is_roman_numeral(input) => InputKind::Roman,
        _ => InputKind::Invalid,
    }
}

/// True iff the input coerces to a finite integer.
#[inline]
pub fn is_arabic_numeral(input: &ConversionInput) -> bool {
    arabic_value(input).is_some()
}

/// True iff the input is text whose uppercase form is made only of
/// M, D, C, L, X, V and I. Empty text is vacuously Roman.
pub fn is_roman_numeral(input: &ConversionInput) -> bool {
    match input {
        ConversionInput::Text(s) => s
            .to_uppercase()
            .chars()
            .all(|c| RomanDigit::from_char(c).is_some()),
        _ => false,
    }
}

/// The integer an input coerces to, if it coerces to one at all.
///
/// Values beyond the i64 range saturate, which keeps them out of range.
pub fn arabic_value(input: &ConversionInput) -> Option<i64> {
    match input {
        ConversionInput::Integer(i) => Some(*i),
        ConversionInput::Float(x) => integral(*x),
        ConversionInput::Decimal(d) => {
            if !d.fract().is_zero() {
                return None;
            }
            Some(d.to_i64().unwrap_or(if d.is_sign_negative() {
                i64::MIN
            } else {
                i64::MAX
            }))
        }
        ConversionInput::Text(s) => coerce_text(s).and_then(integral),
    }
}

fn integral(x: f64) -> Option<i64> {
    // `as` saturates at the i64 bounds
    (x.is_finite() && x.fract() == 0.0).then_some(x as i64)
}

/// Numeric coercion of free text.
///
/// Blank text is 0. Accepts signed decimal forms with optional fraction and
/// exponent, and unsigned 0x / 0o / 0b integers.
fn coerce_text(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let stripped = s
            .strip_prefix(prefix)
            .or_else(|| s.strip_prefix(&prefix.to_uppercase()));
        if let Some(digits) = stripped {
            // from_str_radix tolerates a leading '+'; radix literals carry no sign
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
        }
    }

    // f64's parser also takes "inf" and "nan" spellings; neither is a number here
    let body = s.trim_start_matches(&['+', '-'][..]);
    if !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn text(s: &str) -> ConversionInput {
        ConversionInput::from(s)
    }

    #[test]
    fn test_arabic_numeric_inputs() {
        assert!(is_arabic_numeral(&ConversionInput::from(42i64)));
        assert!(is_arabic_numeral(&ConversionInput::from(-7i64)));
        assert!(is_arabic_numeral(&ConversionInput::from(12.0f64)));
        assert!(!is_arabic_numeral(&ConversionInput::from(12.5f64)));
        assert!(!is_arabic_numeral(&ConversionInput::from(f64::NAN)));
        assert!(!is_arabic_numeral(&ConversionInput::from(f64::INFINITY)));
        assert!(is_arabic_numeral(&ConversionInput::from(Decimal::new(100, 1))));
        assert!(!is_arabic_numeral(&ConversionInput::from(Decimal::new(105, 1))));
    }

    #[test]
    fn test_arabic_text_inputs() {
        assert_eq!(arabic_value(&text("2023")), Some(2023));
        assert_eq!(arabic_value(&text("+12")), Some(12));
        assert_eq!(arabic_value(&text("-5")), Some(-5));
        assert_eq!(arabic_value(&text(" 7 ")), Some(7));
        assert_eq!(arabic_value(&text("12.0")), Some(12));
        assert_eq!(arabic_value(&text("1e3")), Some(1000));
        assert_eq!(arabic_value(&text("0x10")), Some(16));
        assert_eq!(arabic_value(&text("0B101")), Some(5));
        assert_eq!(arabic_value(&text("")), Some(0));
        assert_eq!(arabic_value(&text("   ")), Some(0));

        assert_eq!(arabic_value(&text("12.5")), None);
        assert_eq!(arabic_value(&text("abc")), None);
        assert_eq!(arabic_value(&text("NaN")), None);
        assert_eq!(arabic_value(&text("inf")), None);
        assert_eq!(arabic_value(&text("-infinity")), None);
        assert_eq!(arabic_value(&text("1_000")), None);
        assert_eq!(arabic_value(&text("-0x10")), None);
        assert_eq!(arabic_value(&text("XIV")), None);
    }

    #[test]
    fn test_signed_radix_text_rejected() {
        assert_eq!(arabic_value(&text("0x+10")), None);
        assert_eq!(arabic_value(&text("0o+7")), None);
        assert_eq!(arabic_value(&text("0b+1")), None);
        assert_eq!(arabic_value(&text("0X-1")), None);
        assert_eq!(arabic_value(&text("0x")), None);
        assert_eq!(arabic_value(&text("0b102")), None);
        assert_eq!(arabic_value(&text("0o17")), Some(15));

        assert_eq!(classify(&text("0x+10")), InputKind::Invalid);
        assert_eq!(classify(&text("0b+1")), InputKind::Invalid);
    }

    #[test]
    fn test_saturation() {
        assert_eq!(arabic_value(&text("1e300")), Some(i64::MAX));
        assert_eq!(
            arabic_value(&ConversionInput::from(Decimal::MIN)),
            Some(i64::MIN)
        );
    }

    #[test]
    fn test_roman_inputs() {
        assert!(is_roman_numeral(&text("MCMXCIV")));
        assert!(is_roman_numeral(&text("mcmxciv")));
        assert!(is_roman_numeral(&text("IIX")));
        assert!(is_roman_numeral(&text("")));

        assert!(!is_roman_numeral(&text("ABC")));
        assert!(!is_roman_numeral(&text("X I")));
        assert!(!is_roman_numeral(&text("2023")));
        assert!(!is_roman_numeral(&ConversionInput::from(10i64)));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&text("2023")), InputKind::Arabic(2023));
        assert_eq!(classify(&ConversionInput::from(1i64)), InputKind::Arabic(1));
        assert_eq!(classify(&text("XLII")), InputKind::Roman);
        assert_eq!(classify(&text("")), InputKind::Roman);
        assert_eq!(classify(&ConversionInput::from(0i64)), InputKind::Invalid);
        assert_eq!(classify(&ConversionInput::from(4000i64)), InputKind::Invalid);
        assert_eq!(classify(&text("ABC")), InputKind::Invalid);
        assert_eq!(classify(&text("-1")), InputKind::Invalid);
    }
}
