// ============================================================================
// Engine Module
// Classification, encoding, decoding and the converter facade
// ============================================================================

mod converter;
mod greedy_rewrite;

pub mod classifier;
pub mod decoder;
pub mod factory;
pub mod subtractive_table;

pub use classifier::{classify, is_arabic_numeral, is_roman_numeral, InputKind};
pub use converter::Converter;
pub use factory::{create_from_config, ConverterBuilder};
pub use greedy_rewrite::GreedyRewrite;
pub use subtractive_table::SubtractiveTable;
