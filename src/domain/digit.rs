// ============================================================================
// Roman Digits
// Static bijection between the seven Roman letters and their Arabic values
// ============================================================================

use crate::numeric::{ConversionError, ConversionResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the seven canonical Roman letters.
///
/// The discriminant is the letter's Arabic value, so the mapping is a
/// bijection by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum RomanDigit {
    I = 1,
    V = 5,
    X = 10,
    L = 50,
    C = 100,
    D = 500,
    M = 1000,
}

/// All digits, largest value first. Drives greedy encoding.
pub const DIGITS_DESCENDING: [RomanDigit; 7] = [
    RomanDigit::M,
    RomanDigit::D,
    RomanDigit::C,
    RomanDigit::L,
    RomanDigit::X,
    RomanDigit::V,
    RomanDigit::I,
];

/// Arabic values of the digits, sorted descending.
pub const VALUES_DESCENDING: [u16; 7] = [1000, 500, 100, 50, 10, 5, 1];

/// Four-repeat runs, largest digit first. Only ever an intermediate rewrite
/// target of the greedy encoder, never a valid final numeral.
pub const FOUR_REPEATS: [&str; 7] = ["MMMM", "DDDD", "CCCC", "LLLL", "XXXX", "VVVV", "IIII"];

impl RomanDigit {
    /// Arabic value of this digit.
    #[inline]
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Uppercase letter of this digit.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            RomanDigit::I => 'I',
            RomanDigit::V => 'V',
            RomanDigit::X => 'X',
            RomanDigit::L => 'L',
            RomanDigit::C => 'C',
            RomanDigit::D => 'D',
            RomanDigit::M => 'M',
        }
    }

    /// Digit for an uppercase letter, `None` for anything else.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(RomanDigit::I),
            'V' => Some(RomanDigit::V),
            'X' => Some(RomanDigit::X),
            'L' => Some(RomanDigit::L),
            'C' => Some(RomanDigit::C),
            'D' => Some(RomanDigit::D),
            'M' => Some(RomanDigit::M),
            _ => None,
        }
    }

    /// Digit for an exact Arabic value, `None` unless the value is one of the seven.
    #[inline]
    pub const fn from_value(value: u16) -> Option<Self> {
        match value {
            1 => Some(RomanDigit::I),
            5 => Some(RomanDigit::V),
            10 => Some(RomanDigit::X),
            50 => Some(RomanDigit::L),
            100 => Some(RomanDigit::C),
            500 => Some(RomanDigit::D),
            1000 => Some(RomanDigit::M),
            _ => None,
        }
    }
}

impl TryFrom<char> for RomanDigit {
    type Error = ConversionError;

    fn try_from(c: char) -> ConversionResult<Self> {
        Self::from_char(c).ok_or(ConversionError::InvalidDigit(c))
    }
}

impl fmt::Display for RomanDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Arabic value of a Roman letter.
///
/// Callers must pass one of the seven uppercase letters.
///
/// # Errors
/// Returns `InvalidDigit` for any other character.
#[inline]
pub fn value_of(symbol: char) -> ConversionResult<u16> {
    RomanDigit::try_from(symbol).map(RomanDigit::value)
}

/// Roman letter for one of the seven digit values.
///
/// # Errors
/// Returns `OutOfRange` for any value that is not a single digit.
#[inline]
pub fn symbol_of(value: u16) -> ConversionResult<char> {
    RomanDigit::from_value(value)
        .map(RomanDigit::symbol)
        .ok_or(ConversionError::OutOfRange)
}
