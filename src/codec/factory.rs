// ============================================================================
// Codec Factory
// Creates codecs with validated configuration
// ============================================================================

use crate::codec::RomanCodec;
use crate::domain::config::{CaseSensitivity, CodecConfig, LetterCase};
use crate::interfaces::CodecEventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a codec from configuration
///
/// # Example
/// ```
/// use roman_numerals::prelude::*;
/// use std::sync::Arc;
///
/// let codec = create_from_config(CodecConfig::classical(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(codec.encode(49).unwrap(), "XLIX");
/// ```
pub fn create_from_config(
    config: CodecConfig,
    event_handler: Arc<dyn CodecEventHandler>,
) -> Result<RomanCodec, String> {
    config.validate()?;
    Ok(RomanCodec::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating codecs with fluent API
///
/// # Example
/// ```
/// use roman_numerals::prelude::*;
/// use std::sync::Arc;
///
/// let codec = RomanCodecBuilder::new()
///     .lowercase_output()
///     .with_max_value(100)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(codec.encode(99).unwrap(), "xcix");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RomanCodecBuilder {
    config: CodecConfig,
}

impl RomanCodecBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Case Configuration
    // ========================================================================

    /// Accept numerals in any letter case (default)
    pub fn case_insensitive(mut self) -> Self {
        self.config.input_case = CaseSensitivity::Insensitive;
        self
    }

    /// Accept upper-case numerals only
    pub fn uppercase_only(mut self) -> Self {
        self.config.input_case = CaseSensitivity::UppercaseOnly;
        self
    }

    /// Produce upper-case numerals (default)
    pub fn uppercase_output(mut self) -> Self {
        self.config.output_case = LetterCase::Upper;
        self
    }

    /// Produce lower-case numerals
    pub fn lowercase_output(mut self) -> Self {
        self.config.output_case = LetterCase::Lower;
        self
    }

    // ========================================================================
    // Range Configuration
    // ========================================================================

    /// Set the largest value the codec accepts
    pub fn with_max_value(mut self, max: i64) -> Self {
        self.config.max_value = Some(max);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply classical configuration (1..=3999)
    pub fn classical() -> Self {
        Self {
            config: CodecConfig::classical(),
        }
    }

    /// Apply strict configuration (upper case, 1..=3999)
    pub fn strict() -> Self {
        Self {
            config: CodecConfig::strict(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the codec
    pub fn build(self, event_handler: Arc<dyn CodecEventHandler>) -> Result<RomanCodec, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CodecConfig {
        &self.config
    }
}
