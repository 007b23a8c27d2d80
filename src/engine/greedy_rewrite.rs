// ============================================================================
// Greedy Rewrite Encoder
// Plain greedy decomposition followed by subtractive canonicalization
// ============================================================================
//
// Phase 1 walks the seven digits largest first and repeats each one while it
// still fits, giving additive numerals such as 4 = "IIII" and 9 = "VIIII".
//
// Phase 2 visits the four-repeat runs from C upward to I. For each run R of
// digit d, with n the next larger digit and m the one after that:
//   n + R -> d + m     ("VIIII" -> "IX", "LXXXX" -> "XC", "DCCCC" -> "CM")
//   R     -> d + n     ("IIII"  -> "IV", "XXXX"  -> "XL", "CCCC"  -> "CD")
// MMMM has no larger digit and cannot occur below 4000.

use crate::domain::{DIGITS_DESCENDING, FOUR_REPEATS};
use crate::interfaces::EncodingAlgorithm;
use crate::numeric::RomanNumeral;

/// Two-phase encoder that reproduces the classic rewrite-based output.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyRewrite;

impl GreedyRewrite {
    pub fn new() -> Self {
        Self
    }

    /// Phase 1: additive form, no subtractive pairs.
    pub fn additive(numeral: RomanNumeral) -> String {
        let mut remaining = numeral.value();
        let mut result = String::with_capacity(20);

        for digit in DIGITS_DESCENDING {
            while remaining >= digit.value() {
                remaining -= digit.value();
                result.push(digit.symbol());
            }
        }

        result
    }

    /// Phase 2: rewrite four-repeat runs into subtractive pairs.
    pub fn canonicalize(mut numeral: String) -> String {
        for i in 2..FOUR_REPEATS.len() {
            let run = FOUR_REPEATS[i];
            let digit = DIGITS_DESCENDING[i].symbol();
            let next = DIGITS_DESCENDING[i - 1].symbol();
            let next_but_one = DIGITS_DESCENDING[i - 2].symbol();

            let overlap = format!("{}{}", next, run);
            numeral = numeral.replacen(&overlap, &format!("{}{}", digit, next_but_one), 1);
            numeral = numeral.replacen(run, &format!("{}{}", digit, next), 1);
        }
        numeral
    }
}

impl EncodingAlgorithm for GreedyRewrite {
    fn encode(&self, numeral: RomanNumeral) -> String {
        Self::canonicalize(Self::additive(numeral))
    }

    fn name(&self) -> &str {
        "GreedyRewrite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SubtractiveTable;

    fn numeral(value: u16) -> RomanNumeral {
        RomanNumeral::new(value).unwrap()
    }

    #[test]
    fn test_additive_phase() {
        assert_eq!(GreedyRewrite::additive(numeral(3)), "III");
        assert_eq!(GreedyRewrite::additive(numeral(4)), "IIII");
        assert_eq!(GreedyRewrite::additive(numeral(9)), "VIIII");
        assert_eq!(GreedyRewrite::additive(numeral(40)), "XXXX");
        assert_eq!(GreedyRewrite::additive(numeral(3999)), "MMMDCCCCLXXXXVIIII");
    }

    #[test]
    fn test_canonicalize() {
        assert_eq!(GreedyRewrite::canonicalize("IIII".into()), "IV");
        assert_eq!(GreedyRewrite::canonicalize("VIIII".into()), "IX");
        assert_eq!(GreedyRewrite::canonicalize("LXXXX".into()), "XC");
        assert_eq!(GreedyRewrite::canonicalize("DCCCC".into()), "CM");
        assert_eq!(GreedyRewrite::canonicalize("CCCC".into()), "CD");
        assert_eq!(
            GreedyRewrite::canonicalize("MMMDCCCCLXXXXVIIII".into()),
            "MMMCMXCIX"
        );
    }

    #[test]
    fn test_boundary_values() {
        let encoder = GreedyRewrite::new();
        assert_eq!(encoder.encode(numeral(1)), "I");
        assert_eq!(encoder.encode(numeral(4)), "IV");
        assert_eq!(encoder.encode(numeral(9)), "IX");
        assert_eq!(encoder.encode(numeral(40)), "XL");
        assert_eq!(encoder.encode(numeral(90)), "XC");
        assert_eq!(encoder.encode(numeral(400)), "CD");
        assert_eq!(encoder.encode(numeral(900)), "CM");
        assert_eq!(encoder.encode(numeral(1994)), "MCMXCIV");
        assert_eq!(encoder.encode(numeral(3999)), "MMMCMXCIX");
    }

    #[test]
    fn test_agrees_with_table_encoder() {
        let greedy = GreedyRewrite::new();
        let table = SubtractiveTable::new();
        for value in 1..=3999 {
            let n = numeral(value);
            assert_eq!(greedy.encode(n), table.encode(n), "value {}", value);
        }
    }
}
