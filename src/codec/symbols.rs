// ============================================================================
// Symbol Table
// The (value, symbol) pairs shared by both directions of the codec
// ============================================================================

#[cfg(feature = "serde")]
use serde::Serialize;

/// Largest value with a standard numeral (MMMCMXCIX).
pub const CLASSICAL_MAX: i64 = 3999;

/// Largest value the encoder will spell out (one thousand `M`s).
///
/// Above this the numeral is a run of repeated `M` too long to be useful,
/// and near `i64::MAX` it could not be allocated at all.
pub const MAX_ENCODABLE: i64 = 1_000_000;

/// A single numeral symbol: one of the seven letters or a subtractive pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Symbol {
    /// Integer value contributed by this symbol
    pub value: i64,
    /// Upper-case spelling
    pub text: &'static str,
}

impl Symbol {
    const fn new(value: i64, text: &'static str) -> Self {
        Self { value, text }
    }

    /// True for the two-letter pairs (IV, IX, XL, XC, CD, CM).
    #[inline]
    pub const fn is_subtractive(&self) -> bool {
        self.text.len() == 2
    }
}

/// Descending by value, subtractive pairs interleaved at their rank.
///
/// Walking this table greedily yields the canonical numeral.
pub const ENCODE_ORDER: [Symbol; 13] = [
    Symbol::new(1000, "M"),
    Symbol::new(900, "CM"),
    Symbol::new(500, "D"),
    Symbol::new(400, "CD"),
    Symbol::new(100, "C"),
    Symbol::new(90, "XC"),
    Symbol::new(50, "L"),
    Symbol::new(40, "XL"),
    Symbol::new(10, "X"),
    Symbol::new(9, "IX"),
    Symbol::new(5, "V"),
    Symbol::new(4, "IV"),
    Symbol::new(1, "I"),
];

/// Subtractive pairs first, then single letters, each group descending.
///
/// Prefix matching must try "CM" before "C" or "CD" would read as 600.
pub const DECODE_ORDER: [Symbol; 13] = [
    Symbol::new(900, "CM"),
    Symbol::new(400, "CD"),
    Symbol::new(90, "XC"),
    Symbol::new(40, "XL"),
    Symbol::new(9, "IX"),
    Symbol::new(4, "IV"),
    Symbol::new(1000, "M"),
    Symbol::new(500, "D"),
    Symbol::new(100, "C"),
    Symbol::new(50, "L"),
    Symbol::new(10, "X"),
    Symbol::new(5, "V"),
    Symbol::new(1, "I"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_order_is_descending() {
        assert!(ENCODE_ORDER.windows(2).all(|w| w[0].value > w[1].value));
        assert_eq!(ENCODE_ORDER.last().map(|s| s.value), Some(1));
    }

    #[test]
    fn test_tables_hold_same_symbols() {
        let mut enc: Vec<_> = ENCODE_ORDER.to_vec();
        let mut dec: Vec<_> = DECODE_ORDER.to_vec();
        enc.sort_by_key(|s| s.value);
        dec.sort_by_key(|s| s.value);
        assert_eq!(enc, dec);
    }

    #[test]
    fn test_subtractive_pairs_probed_before_their_prefix_letter() {
        for (i, pair) in DECODE_ORDER.iter().enumerate() {
            if !pair.is_subtractive() {
                continue;
            }
            let lead = &pair.text[..1];
            let lead_index = DECODE_ORDER
                .iter()
                .position(|s| s.text == lead)
                .unwrap();
            assert!(i < lead_index, "{} must precede {}", pair.text, lead);
        }
    }

    #[test]
    fn test_subtractive_flag() {
        assert!(Symbol::new(900, "CM").is_subtractive());
        assert!(!Symbol::new(1000, "M").is_subtractive());
        assert_eq!(ENCODE_ORDER.iter().filter(|s| s.is_subtractive()).count(), 6);
    }

    #[test]
    fn test_encodable_ceiling_covers_classical_range() {
        assert!(MAX_ENCODABLE > CLASSICAL_MAX);
        assert_eq!(MAX_ENCODABLE % 1000, 0);
    }
}
