// ============================================================================
// Encoding Algorithm Interface
// Defines the contract for pluggable Arabic -> Roman encoders
// ============================================================================

use crate::numeric::RomanNumeral;

/// Strategy pattern interface for Arabic -> Roman encoding
/// Implementations: SubtractiveTable, GreedyRewrite
pub trait EncodingAlgorithm: Send + Sync {
    /// Encode a value as its canonical Roman numeral
    ///
    /// # Arguments
    /// * `numeral` - Value already known to lie in [1, 3999]
    ///
    /// # Returns
    /// Uppercase numeral using only the subtractive pairs IV, IX, XL, XC, CD, CM
    fn encode(&self, numeral: RomanNumeral) -> String;

    /// Get the algorithm name for logging
    fn name(&self) -> &str;
}
