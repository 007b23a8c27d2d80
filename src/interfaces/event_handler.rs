// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversions
// ============================================================================

use crate::domain::{Conversion, ConversionInput};
use crate::numeric::ConversionError;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the converter, one per convert call
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConversionEvent {
    /// Arabic input encoded to a Roman numeral
    Encoded {
        input: ConversionInput,
        output: Conversion,
        algorithm: String,
        timestamp: DateTime<Utc>,
    },

    /// Roman input decoded to an integer
    Decoded {
        input: ConversionInput,
        output: Conversion,
        timestamp: DateTime<Utc>,
    },

    /// Input rejected with reason
    Rejected {
        input: ConversionInput,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl ConversionEvent {
    pub(crate) fn rejected(input: &ConversionInput, error: ConversionError) -> Self {
        ConversionEvent::Rejected {
            input: input.clone(),
            reason: error.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Event handler trait for processing converter events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::Rejected { input, reason, .. } => {
                tracing::debug!(%input, %reason, "conversion rejected");
            }
            _ => tracing::debug!("Converter event: {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    struct Recorder(Mutex<Vec<ConversionEvent>>);

    impl EventHandler for Recorder {
        fn on_event(&self, event: ConversionEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a debug-level subscriber and return everything it logged.
    fn captured_logs(f: impl FnOnce()) -> String {
        let writer = CaptureWriter::default();
        let sink = writer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = writer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_noop_handler() {
        let logs = captured_logs(|| {
            NoOpEventHandler.on_event(ConversionEvent::Decoded {
                input: ConversionInput::from("X"),
                output: Conversion::Arabic(10),
                timestamp: Utc::now(),
            });
        });
        assert!(logs.is_empty(), "unexpected output: {}", logs);
    }

    #[test]
    fn test_logging_handler_rejected() {
        let logs = captured_logs(|| {
            LoggingEventHandler.on_event(ConversionEvent::rejected(
                &ConversionInput::from("ABC"),
                ConversionError::InvalidFormat,
            ));
        });
        assert!(logs.contains("DEBUG"), "{}", logs);
        assert!(logs.contains("conversion rejected"), "{}", logs);
        assert!(logs.contains("ABC"), "{}", logs);
        assert!(logs.contains("wrong input format"), "{}", logs);
    }

    #[test]
    fn test_logging_handler_decoded() {
        let logs = captured_logs(|| {
            LoggingEventHandler.on_event(ConversionEvent::Decoded {
                input: ConversionInput::from("XLII"),
                output: Conversion::Arabic(42),
                timestamp: Utc::now(),
            });
        });
        assert!(logs.contains("Converter event: Decoded"), "{}", logs);
        assert!(logs.contains("Arabic(42)"), "{}", logs);
    }

    #[test]
    fn test_batch_events() {
        let handler = Recorder(Mutex::new(Vec::new()));
        handler.on_events(vec![
            ConversionEvent::rejected(&ConversionInput::from(0i64), ConversionError::InvalidFormat),
            ConversionEvent::rejected(&ConversionInput::from(4000i64), ConversionError::InvalidFormat),
        ]);

        let events = handler.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            ConversionEvent::Rejected { reason, .. } if reason == "wrong input format"
        ));
    }
}
