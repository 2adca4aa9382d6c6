// ============================================================================
// Numeral Errors
// Error types for Roman numeral parsing and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while encoding, decoding or combining numerals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Input string was empty
    Empty,
    /// No symbol matched the input at this position
    UnrecognizedSymbol {
        /// Character index into the (case-normalized) input
        position: usize,
        /// The character that could not be matched
        found: char,
    },
    /// Value is zero or negative
    NonPositive(i64),
    /// Value exceeds the configured upper bound
    OutOfRange {
        /// The offending value
        value: i64,
        /// The largest value allowed
        max: i64,
    },
    /// Result exceeded i64::MAX
    Overflow,
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::Empty => write!(f, "empty input: there is no empty numeral"),
            NumeralError::UnrecognizedSymbol { position, found } => {
                write!(f, "unrecognized symbol {:?} at position {}", found, position)
            },
            NumeralError::NonPositive(value) => {
                write!(f, "non-positive value {} has no Roman numeral", value)
            },
            NumeralError::OutOfRange { value, max } => {
                write!(f, "value {} exceeds the maximum of {}", value, max)
            },
            NumeralError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumeralError::Empty.to_string(),
            "empty input: there is no empty numeral"
        );
        assert_eq!(
            NumeralError::UnrecognizedSymbol {
                position: 2,
                found: 'Z'
            }
            .to_string(),
            "unrecognized symbol 'Z' at position 2"
        );
        assert_eq!(
            NumeralError::NonPositive(-5).to_string(),
            "non-positive value -5 has no Roman numeral"
        );
        assert_eq!(
            NumeralError::OutOfRange {
                value: 4000,
                max: 3999
            }
            .to_string(),
            "value 4000 exceeds the maximum of 3999"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumeralError::Overflow, NumeralError::Overflow);
        assert_ne!(NumeralError::NonPositive(0), NumeralError::NonPositive(-1));
        assert_ne!(NumeralError::Empty, NumeralError::Overflow);
    }
}
