// ============================================================================
// Converter Factory
// Creates converters with proper configuration
// ============================================================================

use crate::domain::config::{
    ConverterConfig, DecodeMode, EmptyInputPolicy, EncodingAlgorithmType,
};
use crate::engine::{Converter, GreedyRewrite, SubtractiveTable};
use crate::interfaces::{EncodingAlgorithm, EventHandler};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a converter from configuration
///
/// # Arguments
/// * `config` - Converter configuration
/// * `event_handler` - Event handler for conversion events
///
/// # Example
/// ```
/// use roman_converter::prelude::*;
/// use std::sync::Arc;
///
/// let converter = create_from_config(ConverterConfig::strict(), Arc::new(NoOpEventHandler));
/// assert_eq!(converter.convert("XIV"), Ok(Conversion::Arabic(14)));
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Converter {
    let algorithm = create_encoding_algorithm(config.encoding_algorithm);
    tracing::debug!(
        algorithm = algorithm.name(),
        empty_input = ?config.empty_input,
        decode_mode = ?config.decode_mode,
        "creating converter"
    );

    Converter::new(config, algorithm, event_handler)
}

/// Creates the appropriate encoder from configuration
fn create_encoding_algorithm(algo_type: EncodingAlgorithmType) -> Box<dyn EncodingAlgorithm> {
    match algo_type {
        EncodingAlgorithmType::SubtractiveTable => Box::new(SubtractiveTable::new()),
        EncodingAlgorithmType::GreedyRewrite => Box::new(GreedyRewrite::new()),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use roman_converter::prelude::*;
/// use std::sync::Arc;
///
/// let converter = ConverterBuilder::new()
///     .greedy_rewrite_encoding()
///     .reject_empty_input()
///     .build(Arc::new(NoOpEventHandler));
///
/// assert_eq!(converter.convert(1994), Ok(Conversion::Roman("MCMXCIV".into())));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Encoding Algorithm Configuration
    // ========================================================================

    /// Configure the table-driven encoder (default)
    pub fn subtractive_table_encoding(mut self) -> Self {
        self.config.encoding_algorithm = EncodingAlgorithmType::SubtractiveTable;
        self
    }

    /// Configure the two-phase greedy rewrite encoder
    pub fn greedy_rewrite_encoding(mut self) -> Self {
        self.config.encoding_algorithm = EncodingAlgorithmType::GreedyRewrite;
        self
    }

    // ========================================================================
    // Input Policies
    // ========================================================================

    /// Decode empty text as 0 (default)
    pub fn decode_empty_as_zero(mut self) -> Self {
        self.config.empty_input = EmptyInputPolicy::DecodeAsZero;
        self
    }

    /// Treat empty text as a format error
    pub fn reject_empty_input(mut self) -> Self {
        self.config.empty_input = EmptyInputPolicy::Reject;
        self
    }

    /// Set the decode mode
    pub fn decode_mode(mut self, mode: DecodeMode) -> Self {
        self.config.decode_mode = mode;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from the compatible preset
    pub fn compatible() -> Self {
        Self {
            config: ConverterConfig::compatible(),
        }
    }

    /// Start from the strict preset
    pub fn strict() -> Self {
        Self {
            config: ConverterConfig::strict(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Converter {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}
