// ============================================================================
// Roman Value
// A positive integer paired with its numeral spelling
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use crate::codec::{decode, try_encode, CLASSICAL_MAX};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Rem, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A positive integer together with a Roman numeral for it.
///
/// Built from an integer, the numeral is the canonical greedy form. Built
/// from a string, the numeral is the caller's string exactly as given, so
/// `"iiii"` keeps that spelling while its value is 4.
///
/// Equality, ordering and hashing use only the integer.
///
/// # Example
/// ```
/// use roman_numerals::Roman;
///
/// let a = Roman::new(13);
/// let b: Roman = "iii".parse().unwrap();
/// let product = a * b;
/// assert_eq!(product.value(), 39);
/// assert_eq!(product.numeral(), "XXXIX");
/// ```
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Roman {
    value: i64,
    numeral: String,
}

impl Roman {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a positive integer.
    ///
    /// # Panics
    /// Panics if `value <= 0` (there is no numeral for zero or negatives)
    /// or if `value > MAX_ENCODABLE`.
    #[inline]
    pub fn new(value: i64) -> Self {
        Self::try_new(value).unwrap_or_else(|err| {
            panic!("Cannot make Roman numeral from {}: {}", value, err)
        })
    }

    /// Checked construction from an integer.
    ///
    /// # Errors
    /// Returns `NonPositive` if `value <= 0`, `OutOfRange` above `MAX_ENCODABLE`.
    pub fn try_new(value: i64) -> NumeralResult<Self> {
        let numeral = try_encode(value)?;
        Ok(Self { value, numeral })
    }

    /// Parse a numeral, ignoring case. The input string is kept verbatim.
    ///
    /// # Errors
    /// Any decoding error (`Empty`, `UnrecognizedSymbol`, `Overflow`).
    pub fn from_numeral(numeral: &str) -> NumeralResult<Self> {
        let value = decode(numeral)?;
        Ok(Self {
            value,
            numeral: numeral.to_string(),
        })
    }

    /// Pair an already validated value with its spelling.
    pub(crate) fn from_parts(value: i64, numeral: String) -> Self {
        debug_assert!(value > 0);
        Self { value, numeral }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The integer value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// The stored spelling.
    #[inline]
    pub fn numeral(&self) -> &str {
        &self.numeral
    }

    /// The canonical upper-case spelling of this value.
    ///
    /// Empty for parsed values above `MAX_ENCODABLE`.
    pub fn canonical(&self) -> String {
        try_encode(self.value).unwrap_or_default()
    }

    /// Whether the stored spelling is already the canonical one.
    pub fn is_canonical(&self) -> bool {
        self.numeral == self.canonical()
    }

    /// Whether the value lies in 1..=3999.
    #[inline]
    pub const fn is_classical(&self) -> bool {
        self.value <= CLASSICAL_MAX
    }

    /// Widen to i64.
    #[inline]
    pub const fn to_i64(&self) -> i64 {
        self.value
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum exceeds i64::MAX, `OutOfRange` if it
    /// exceeds `MAX_ENCODABLE`.
    pub fn checked_add(&self, rhs: &Self) -> NumeralResult<Self> {
        let sum = self
            .value
            .checked_add(rhs.value)
            .ok_or(NumeralError::Overflow)?;
        Self::try_new(sum)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `NonPositive` if `rhs >= self`.
    pub fn checked_sub(&self, rhs: &Self) -> NumeralResult<Self> {
        let diff = self
            .value
            .checked_sub(rhs.value)
            .ok_or(NumeralError::Overflow)?;
        Self::try_new(diff)
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` if the product exceeds i64::MAX, `OutOfRange` if
    /// it exceeds `MAX_ENCODABLE`.
    pub fn checked_mul(&self, rhs: &Self) -> NumeralResult<Self> {
        let product = self
            .value
            .checked_mul(rhs.value)
            .ok_or(NumeralError::Overflow)?;
        Self::try_new(product)
    }

    /// Checked integer division (truncating).
    ///
    /// # Errors
    /// Returns `NonPositive` if `rhs > self`.
    pub fn checked_div(&self, rhs: &Self) -> NumeralResult<Self> {
        let quotient = self
            .value
            .checked_div(rhs.value)
            .ok_or(NumeralError::Overflow)?;
        Self::try_new(quotient)
    }

    /// Checked remainder.
    ///
    /// # Errors
    /// Returns `NonPositive` if `rhs` divides `self` evenly.
    pub fn checked_rem(&self, rhs: &Self) -> NumeralResult<Self> {
        let remainder = self
            .value
            .checked_rem(rhs.value)
            .ok_or(NumeralError::Overflow)?;
        Self::try_new(remainder)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Roman {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Roman {}

impl PartialOrd for Roman {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Roman {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Roman {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// Infallible operators panic on a non-positive or overflowing result,
// the same as `Roman::new`. Use checked_* to get a Result.
macro_rules! impl_roman_op {
    ($trait:ident, $method:ident, $checked:ident, $verb:literal) => {
        impl $trait for Roman {
            type Output = Roman;

            #[inline]
            fn $method(self, rhs: Roman) -> Roman {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&Roman> for &Roman {
            type Output = Roman;

            fn $method(self, rhs: &Roman) -> Roman {
                self.$checked(rhs).unwrap_or_else(|err| {
                    panic!(
                        "Roman {} of {} and {} failed: {}",
                        $verb, self.value, rhs.value, err
                    )
                })
            }
        }
    };
}

impl_roman_op!(Add, add, checked_add, "addition");
impl_roman_op!(Sub, sub, checked_sub, "subtraction");
impl_roman_op!(Mul, mul, checked_mul, "multiplication");
impl_roman_op!(Div, div, checked_div, "division");
impl_roman_op!(Rem, rem, checked_rem, "remainder");

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Roman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Roman({}, value={})", self.numeral, self.value)
    }
}

impl fmt::Display for Roman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.numeral)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl FromStr for Roman {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_numeral(s)
    }
}

impl TryFrom<String> for Roman {
    type Error = NumeralError;

    fn try_from(numeral: String) -> Result<Self, Self::Error> {
        let value = decode(&numeral)?;
        Ok(Self { value, numeral })
    }
}

impl TryFrom<i64> for Roman {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Roman> for i64 {
    fn from(roman: Roman) -> Self {
        roman.value
    }
}

impl From<Roman> for String {
    fn from(roman: Roman) -> Self {
        roman.numeral
    }
}

// ============================================================================
// Tests
// ============================================================================
