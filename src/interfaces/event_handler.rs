// ============================================================================
// Event Handler Interface
// Defines the contract for observing codec conversions
// ============================================================================

use crate::numeral::NumeralError;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by a [`RomanCodec`](crate::codec::RomanCodec)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CodecEvent {
    /// Integer encoded to a numeral
    Encoded { value: i64, numeral: String },

    /// Numeral decoded to an integer
    Decoded { numeral: String, value: i64 },

    /// Integer could not be encoded
    EncodeRejected {
        value: i64,
        #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_reason"))]
        reason: NumeralError,
    },

    /// Numeral could not be decoded
    DecodeRejected {
        input: String,
        #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_reason"))]
        reason: NumeralError,
    },
}

#[cfg(feature = "serde")]
fn serialize_reason<S: serde::Serializer>(
    reason: &NumeralError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

/// Event handler trait for processing codec events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait CodecEventHandler: Send + Sync {
    /// Handle a codec event
    fn on_event(&self, event: CodecEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CodecEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl CodecEventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CodecEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl CodecEventHandler for LoggingEventHandler {
    fn on_event(&self, event: CodecEvent) {
        match &event {
            CodecEvent::EncodeRejected { .. } | CodecEvent::DecodeRejected { .. } => {
                tracing::warn!("Codec event: {:?}", event);
            },
            _ => tracing::debug!("Codec event: {:?}", event),
        }
    }
}
