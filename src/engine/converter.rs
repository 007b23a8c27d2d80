// ============================================================================
// Converter
// Single entry point: classify the input, then encode or decode it
// ============================================================================

use crate::domain::{Conversion, ConversionInput, ConverterConfig, DecodeMode};
use crate::engine::classifier::{self, InputKind};
use crate::engine::{decoder, SubtractiveTable};
use crate::interfaces::{ConversionEvent, EncodingAlgorithm, EventHandler, NoOpEventHandler};
use crate::numeric::{ConversionError, ConversionResult, RomanNumeral};
use chrono::Utc;
use std::sync::Arc;

/// Arabic <-> Roman converter with a pluggable encoder
pub struct Converter {
    /// Empty input and decoding policies
    config: ConverterConfig,

    /// Pluggable Arabic -> Roman encoder
    algorithm: Box<dyn EncodingAlgorithm>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Converter {
    /// Create a new converter
    pub fn new(
        config: ConverterConfig,
        algorithm: Box<dyn EncodingAlgorithm>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            config,
            algorithm,
            event_handler,
        }
    }

    /// Convert an Arabic numeral to Roman, or a Roman numeral to Arabic.
    ///
    /// Arabic input (a number, or text that coerces to an integer) in
    /// [1, 3999] is encoded. Otherwise text made only of Roman letters, in
    /// any case, is decoded. Everything else fails.
    ///
    /// # Errors
    /// - `InvalidFormat` for out-of-range numbers, non-Roman text, and empty
    ///   text under `EmptyInputPolicy::Reject`
    /// - `MalformedNumeral` for non-canonical numerals under `DecodeMode::Strict`
    pub fn convert(&self, input: impl Into<ConversionInput>) -> ConversionResult<Conversion> {
        let input = input.into();

        let result = match classifier::classify(&input) {
            InputKind::Arabic(value) => self.encode_value(value),
            InputKind::Roman => self.decode_text(input.as_text().unwrap_or_default()),
            InputKind::Invalid => Err(ConversionError::InvalidFormat),
        };

        let event = match &result {
            Ok(output @ Conversion::Roman(_)) => ConversionEvent::Encoded {
                input,
                output: output.clone(),
                algorithm: self.algorithm.name().to_string(),
                timestamp: Utc::now(),
            },
            Ok(output @ Conversion::Arabic(_)) => ConversionEvent::Decoded {
                input,
                output: output.clone(),
                timestamp: Utc::now(),
            },
            Err(error) => ConversionEvent::rejected(&input, *error),
        };
        self.event_handler.on_event(event);

        result
    }

    /// Encode a value with the configured algorithm.
    ///
    /// # Errors
    /// Returns `OutOfRange` unless `1 <= value <= 3999`.
    pub fn to_roman(&self, value: i64) -> ConversionResult<String> {
        let numeral = RomanNumeral::try_from(value)?;
        Ok(self.algorithm.encode(numeral))
    }

    /// Decode Roman text under the configured decode mode.
    ///
    /// # Errors
    /// `InvalidDigit` for non-Roman characters, plus the strict-mode errors of
    /// [`decoder::decode_strict`].
    pub fn from_roman(&self, numeral: &str) -> ConversionResult<i64> {
        match self.config.decode_mode {
            DecodeMode::Lenient => decoder::decode_lenient(numeral),
            DecodeMode::Strict => decoder::decode_strict(numeral).map(i64::from),
        }
    }

    fn encode_value(&self, value: i64) -> ConversionResult<Conversion> {
        let roman = self
            .to_roman(value)
            .map_err(|_| ConversionError::InvalidFormat)?;
        tracing::trace!(value, %roman, algorithm = self.algorithm.name(), "encoded");
        Ok(Conversion::Roman(roman))
    }

    fn decode_text(&self, text: &str) -> ConversionResult<Conversion> {
        if text.is_empty() && self.config.rejects_empty() {
            return Err(ConversionError::InvalidFormat);
        }

        let value = self.from_roman(text).map_err(|error| match error {
            // Strict mode turns "" into an empty (0) numeral; keep the format error
            ConversionError::OutOfRange if text.is_empty() => ConversionError::InvalidFormat,
            ConversionError::OutOfRange | ConversionError::MalformedNumeral => {
                ConversionError::MalformedNumeral
            }
            // Only reachable when called with text the classifier did not vet
            ConversionError::InvalidDigit(_) | ConversionError::InvalidFormat => {
                ConversionError::InvalidFormat
            }
        })?;
        tracing::trace!(numeral = text, value, "decoded");
        Ok(Conversion::Arabic(value))
    }

    /// Get the active configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Get the encoder name
    pub fn algorithm_name(&self) -> &str {
        self.algorithm.name()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(
            ConverterConfig::default(),
            Box::new(SubtractiveTable::new()),
            Arc::new(NoOpEventHandler),
        )
    }
}
