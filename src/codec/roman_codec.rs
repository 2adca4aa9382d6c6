// ============================================================================
// Roman Codec
// Configured codec instance that reports every conversion to a handler
// ============================================================================

use super::decoder::{decode, decode_strict};
use super::encoder::try_encode;
use crate::domain::{CaseSensitivity, CodecConfig, LetterCase};
use crate::interfaces::{CodecEvent, CodecEventHandler};
use crate::numeral::{NumeralError, NumeralResult, Roman};
use std::sync::Arc;

/// Roman numeral codec with configurable case and range policy.
///
/// Unlike the free [`encode`](crate::encode) function, every failure here
/// is returned as a `Result`, including non-positive input.
pub struct RomanCodec {
    /// Case and range policy
    config: CodecConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn CodecEventHandler>,
}

impl RomanCodec {
    /// Create a new codec. The configuration is assumed valid; use
    /// [`RomanCodecBuilder`](super::RomanCodecBuilder) to have it checked.
    pub fn new(config: CodecConfig, event_handler: Arc<dyn CodecEventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Encode an integer under this codec's policy.
    ///
    /// # Errors
    /// - `NonPositive` if `value <= 0`
    /// - `OutOfRange` if `value` exceeds the configured maximum
    pub fn encode(&self, value: i64) -> NumeralResult<String> {
        let result = self
            .check_range(value)
            .and_then(|()| try_encode(value))
            .map(|numeral| match self.config.output_case {
                LetterCase::Upper => numeral,
                LetterCase::Lower => numeral.to_ascii_lowercase(),
            });

        self.event_handler.on_event(match &result {
            Ok(numeral) => CodecEvent::Encoded {
                value,
                numeral: numeral.clone(),
            },
            Err(reason) => CodecEvent::EncodeRejected {
                value,
                reason: reason.clone(),
            },
        });

        result
    }

    /// Decode a numeral under this codec's policy.
    ///
    /// # Errors
    /// - `Empty`, `UnrecognizedSymbol` or `Overflow` from the decoder
    /// - `OutOfRange` if the decoded value exceeds the configured maximum
    pub fn decode(&self, numeral: &str) -> NumeralResult<i64> {
        let decoded = match self.config.input_case {
            CaseSensitivity::Insensitive => decode(numeral),
            CaseSensitivity::UppercaseOnly => decode_strict(numeral),
        };
        let result = decoded.and_then(|value| self.check_range(value).map(|()| value));

        self.event_handler.on_event(match &result {
            Ok(value) => CodecEvent::Decoded {
                numeral: numeral.to_string(),
                value: *value,
            },
            Err(reason) => CodecEvent::DecodeRejected {
                input: numeral.to_string(),
                reason: reason.clone(),
            },
        });

        result
    }

    /// Build a [`Roman`] from an integer, spelled in the configured case.
    pub fn to_roman(&self, value: i64) -> NumeralResult<Roman> {
        let numeral = self.encode(value)?;
        Ok(Roman::from_parts(value, numeral))
    }

    /// Parse a [`Roman`], keeping the input spelling.
    pub fn parse(&self, numeral: &str) -> NumeralResult<Roman> {
        let value = self.decode(numeral)?;
        Ok(Roman::from_parts(value, numeral.to_string()))
    }

    /// Get the codec configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn check_range(&self, value: i64) -> NumeralResult<()> {
        match self.config.max_value {
            Some(max) if value > max => Err(NumeralError::OutOfRange { value, max }),
            _ => Ok(()),
        }
    }
}

impl Default for RomanCodec {
    fn default() -> Self {
        Self::new(
            CodecConfig::default(),
            Arc::new(crate::interfaces::NoOpEventHandler),
        )
    }
}
