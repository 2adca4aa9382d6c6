// ============================================================================
// Codec Configuration
// Letter case and range policy for a configured codec instance
// ============================================================================

use crate::codec::{CLASSICAL_MAX, MAX_ENCODABLE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Case Policies
// ============================================================================

/// How the decoder treats letter case in its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CaseSensitivity {
    /// "xvii", "XVII" and "xVii" all decode to 17
    #[default]
    Insensitive,

    /// Only upper-case letters are symbols; "xvii" is rejected
    UppercaseOnly,
}

/// Letter case of numerals produced by the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterCase {
    /// MCMXCIV
    #[default]
    Upper,

    /// mcmxciv
    Lower,
}

// ============================================================================
// Complete Codec Configuration
// ============================================================================

/// Configuration for a [`RomanCodec`](crate::codec::RomanCodec)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodecConfig {
    /// Case handling when decoding
    pub input_case: CaseSensitivity,

    /// Case of encoded output
    pub output_case: LetterCase,

    /// Optional: largest value the codec will encode or accept when decoding
    /// None means no upper bound
    pub max_value: Option<i64>,
}

impl CodecConfig {
    /// Create a new configuration with explicit case policies
    pub fn new(input_case: CaseSensitivity, output_case: LetterCase) -> Self {
        Self {
            input_case,
            output_case,
            max_value: None,
        }
    }

    /// Builder method: Set the upper bound
    pub fn with_max_value(mut self, max: i64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Builder method: Set decoder case handling
    pub fn with_input_case(mut self, input_case: CaseSensitivity) -> Self {
        self.input_case = input_case;
        self
    }

    /// Builder method: Set encoder output case
    pub fn with_output_case(mut self, output_case: LetterCase) -> Self {
        self.output_case = output_case;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(max) = self.max_value {
            if max <= 0 {
                return Err("Maximum value must be positive".to_string());
            }
            if max > MAX_ENCODABLE {
                return Err(format!(
                    "Maximum value cannot exceed the encodable limit of {}",
                    MAX_ENCODABLE
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CodecConfig {
    /// Classical numerals
    /// - Case-insensitive input, upper-case output
    /// - Values limited to 1..=3999
    pub fn classical() -> Self {
        Self::default().with_max_value(CLASSICAL_MAX)
    }

    /// Strict numerals
    /// - Upper-case input only
    /// - Values limited to 1..=3999
    pub fn strict() -> Self {
        Self::classical().with_input_case(CaseSensitivity::UppercaseOnly)
    }

    /// Lower-case numerals, as used for page and list numbering
    /// - Case-insensitive input, lower-case output
    /// - No upper bound
    pub fn lowercase() -> Self {
        Self::new(CaseSensitivity::Insensitive, LetterCase::Lower)
    }
}
