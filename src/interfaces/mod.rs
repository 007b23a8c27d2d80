// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod encoding_algorithm;
mod event_handler;

pub use encoding_algorithm::EncodingAlgorithm;
pub use event_handler::{ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
