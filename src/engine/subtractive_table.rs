// ============================================================================
// Subtractive Table Encoder
// Greedy encoding over a table that already holds the subtractive pairs
// ============================================================================
//
// Each decimal place needs at most one table entry per tier, so the walk
// never emits a four-repeat run and needs no rewrite pass afterwards.

use crate::domain::RomanDigit::{self, C, D, I, L, M, V, X};
use crate::interfaces::EncodingAlgorithm;
use crate::numeric::{RomanNumeral, MAX_NUMERAL_LEN};
use arrayvec::ArrayVec;

/// (value, digits) pairs, largest first.
const TABLE: [(u16, &[RomanDigit]); 13] = [
    (1000, &[M]),
    (900, &[C, M]),
    (500, &[D]),
    (400, &[C, D]),
    (100, &[C]),
    (90, &[X, C]),
    (50, &[L]),
    (40, &[X, L]),
    (10, &[X]),
    (9, &[I, X]),
    (5, &[V]),
    (4, &[I, V]),
    (1, &[I]),
];

/// Canonical digits of a numeral, most significant first.
pub fn encode_digits(numeral: RomanNumeral) -> ArrayVec<RomanDigit, MAX_NUMERAL_LEN> {
    let mut remaining = numeral.value();
    let mut digits = ArrayVec::new();

    for (value, symbols) in TABLE {
        while remaining >= value {
            remaining -= value;
            // Capacity holds for every value in range; 3888 fills it exactly
            digits.extend(symbols.iter().copied());
        }
    }

    digits
}

/// Table-driven encoder. The default algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtractiveTable;

impl SubtractiveTable {
    pub fn new() -> Self {
        Self
    }
}

impl EncodingAlgorithm for SubtractiveTable {
    fn encode(&self, numeral: RomanNumeral) -> String {
        encode_digits(numeral)
            .iter()
            .map(|digit| digit.symbol())
            .collect()
    }

    fn name(&self) -> &str {
        "SubtractiveTable"
    }
}
