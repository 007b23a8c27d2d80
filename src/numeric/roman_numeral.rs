// ============================================================================
// Roman Numeral
// Validated integer in the representable range with canonical formatting
// ============================================================================

use super::errors::{ConversionError, ConversionResult};
use crate::domain::RomanDigit;
use crate::engine::{decoder, subtractive_table};
use arrayvec::ArrayVec;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest canonical numeral in range: 3888 = MMMDCCCLXXXVIII.
pub const MAX_NUMERAL_LEN: usize = 15;

/// An integer in [1, 3999], the range canonical Roman numerals can express.
///
/// `Display` writes the canonical numeral and `FromStr` only accepts one,
/// so `n.to_string().parse::<RomanNumeral>() == Ok(n)` for every value.
///
/// # Example
/// ```
/// use roman_converter::numeric::RomanNumeral;
///
/// let year = RomanNumeral::new(1994).unwrap();
/// assert_eq!(year.to_string(), "MCMXCIV");
/// assert_eq!("mcmxciv".parse::<RomanNumeral>(), Ok(year));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
#[repr(transparent)]
pub struct RomanNumeral(u16);

impl RomanNumeral {
    /// Smallest representable value (I)
    pub const MIN: Self = Self(1);

    /// Largest representable value (MMMCMXCIX)
    pub const MAX: Self = Self(3999);

    /// Create from a plain value.
    ///
    /// # Errors
    /// Returns `OutOfRange` unless `1 <= value <= 3999`.
    #[inline]
    pub const fn new(value: u16) -> ConversionResult<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(ConversionError::OutOfRange)
        }
    }

    /// The integer value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Canonical digit sequence, most significant first.
    #[inline]
    pub fn digits(self) -> ArrayVec<RomanDigit, MAX_NUMERAL_LEN> {
        subtractive_table::encode_digits(self)
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl FromStr for RomanNumeral {
    type Err = ConversionError;

    /// Parse a canonical numeral, case-insensitively.
    ///
    /// # Examples
    /// - "XIV" -> 14
    /// - "mmxxiv" -> 2024
    /// - "IIII" -> `MalformedNumeral`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decoder::decode_strict(s)
    }
}

impl TryFrom<u16> for RomanNumeral {
    type Error = ConversionError;

    fn try_from(value: u16) -> ConversionResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<i64> for RomanNumeral {
    type Error = ConversionError;

    fn try_from(value: i64) -> ConversionResult<Self> {
        u16::try_from(value)
            .map_err(|_| ConversionError::OutOfRange)
            .and_then(Self::new)
    }
}

impl TryFrom<Decimal> for RomanNumeral {
    type Error = ConversionError;

    /// Convert from rust_decimal::Decimal.
    ///
    /// Intended for API boundaries. Values with a fractional part are not
    /// numerals at all and fail with `InvalidFormat`.
    fn try_from(value: Decimal) -> ConversionResult<Self> {
        if !value.fract().is_zero() {
            return Err(ConversionError::InvalidFormat);
        }
        value
            .to_i64()
            .ok_or(ConversionError::OutOfRange)
            .and_then(Self::try_from)
    }
}

impl From<RomanNumeral> for u16 {
    #[inline]
    fn from(numeral: RomanNumeral) -> Self {
        numeral.0
    }
}

impl From<RomanNumeral> for i64 {
    #[inline]
    fn from(numeral: RomanNumeral) -> Self {
        i64::from(numeral.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
