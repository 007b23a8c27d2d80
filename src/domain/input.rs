// ============================================================================
// Conversion Input and Output
// Transient values flowing through a single convert call
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw value handed to the converter.
///
/// Text may hold either notation. The numeric variants are always candidates
/// for Arabic -> Roman encoding and never classify as Roman.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionInput {
    /// Free text: a decimal string or a Roman numeral (any case)
    Text(String),
    /// Machine integer
    Integer(i64),
    /// Floating point number; only integral finite values are Arabic numerals
    Float(f64),
    /// Exact decimal from an API boundary
    Decimal(Decimal),
}

impl ConversionInput {
    /// Borrow the text, if this is a text input.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConversionInput::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ConversionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionInput::Text(s) => write!(f, "{:?}", s),
            ConversionInput::Integer(i) => write!(f, "{}", i),
            ConversionInput::Float(x) => write!(f, "{}", x),
            ConversionInput::Decimal(d) => write!(f, "{}", d),
        }
    }
}

impl From<&str> for ConversionInput {
    fn from(s: &str) -> Self {
        ConversionInput::Text(s.to_string())
    }
}

impl From<String> for ConversionInput {
    fn from(s: String) -> Self {
        ConversionInput::Text(s)
    }
}

impl From<&String> for ConversionInput {
    fn from(s: &String) -> Self {
        ConversionInput::Text(s.clone())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ConversionInput {
                fn from(value: $t) -> Self {
                    ConversionInput::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for ConversionInput {
    fn from(value: f64) -> Self {
        ConversionInput::Float(value)
    }
}

impl From<f32> for ConversionInput {
    fn from(value: f32) -> Self {
        ConversionInput::Float(f64::from(value))
    }
}

impl From<Decimal> for ConversionInput {
    fn from(value: Decimal) -> Self {
        ConversionInput::Decimal(value)
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Conversion {
    /// Arabic input encoded as a canonical Roman numeral
    Roman(String),
    /// Roman input decoded to its integer value
    Arabic(i64),
}

impl Conversion {
    /// The Roman numeral, if the input was Arabic.
    pub fn as_roman(&self) -> Option<&str> {
        match self {
            Conversion::Roman(s) => Some(s.as_str()),
            Conversion::Arabic(_) => None,
        }
    }

    /// The integer value, if the input was Roman.
    pub fn as_arabic(&self) -> Option<i64> {
        match self {
            Conversion::Arabic(n) => Some(*n),
            Conversion::Roman(_) => None,
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Roman(s) => write!(f, "{}", s),
            Conversion::Arabic(n) => write!(f, "{}", n),
        }
    }
}
