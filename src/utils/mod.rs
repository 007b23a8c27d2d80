// ============================================================================
// Utilities Module
// Helper functions for hosting the converter
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_tracing;
