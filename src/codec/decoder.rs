// ============================================================================
// Decoder
// Greedy left-to-right prefix matching of numerals back to integers
// ============================================================================
//
// Only prefix matchability is checked, not numeral grammar: "IIII" is 4,
// "VX" is 15 (V then X), "IIV" is 5 (I then IV). Every single letter is in
// the table, so decoding fails only on empty input or a foreign character.

use super::symbols::{Symbol, DECODE_ORDER};
use crate::numeral::{NumeralError, NumeralResult};
use smallvec::SmallVec;

/// Matched symbols of a numeral, in input order.
pub type SymbolTrace = SmallVec<[Symbol; 16]>;

/// Iterator over the symbols greedily matched from an already-normalized input.
///
/// Yields one `Err` and then stops if a position matches nothing.
#[derive(Debug, Clone)]
pub struct SymbolScanner<'a> {
    rest: &'a str,
    position: usize,
    failed: bool,
}

impl<'a> SymbolScanner<'a> {
    /// Scan `input` as-is; callers normalize case beforehand.
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            position: 0,
            failed: false,
        }
    }
}

impl Iterator for SymbolScanner<'_> {
    type Item = NumeralResult<Symbol>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }

        match DECODE_ORDER
            .iter()
            .find(|symbol| self.rest.starts_with(symbol.text))
        {
            Some(symbol) => {
                self.rest = &self.rest[symbol.text.len()..];
                self.position += symbol.text.chars().count();
                Some(Ok(*symbol))
            },
            None => {
                self.failed = true;
                let found = self.rest.chars().next().unwrap_or_default();
                Some(Err(NumeralError::UnrecognizedSymbol {
                    position: self.position,
                    found,
                }))
            },
        }
    }
}

/// Decode a numeral, ignoring letter case.
///
/// # Errors
/// - `Empty` for `""`
/// - `UnrecognizedSymbol` if some position matches no symbol
/// - `Overflow` if the sum exceeds `i64::MAX`
///
/// # Example
/// ```
/// assert_eq!(roman_numerals::decode("xvii"), Ok(17));
/// assert!(roman_numerals::decode("ZZZ").is_err());
/// ```
pub fn decode(input: &str) -> NumeralResult<i64> {
    if input.is_empty() {
        return Err(NumeralError::Empty);
    }
    let value = sum(&mut SymbolScanner::new(&input.to_uppercase()))?;
    tracing::trace!(numeral = input, value, "decoded");
    Ok(value)
}

/// Decode a numeral that must already be upper case.
///
/// Lower-case letters are reported as `UnrecognizedSymbol`.
pub fn decode_strict(input: &str) -> NumeralResult<i64> {
    if input.is_empty() {
        return Err(NumeralError::Empty);
    }
    sum(&mut SymbolScanner::new(input))
}

/// Split a numeral into the symbols the decoder matches, ignoring case.
///
/// ```
/// let trace = roman_numerals::tokenize("MCMIV").unwrap();
/// let texts: Vec<_> = trace.iter().map(|s| s.text).collect();
/// assert_eq!(texts, ["M", "CM", "IV"]);
/// ```
pub fn tokenize(input: &str) -> NumeralResult<SymbolTrace> {
    if input.is_empty() {
        return Err(NumeralError::Empty);
    }
    SymbolScanner::new(&input.to_uppercase()).collect()
}

fn sum(scanner: &mut SymbolScanner<'_>) -> NumeralResult<i64> {
    scanner.try_fold(0i64, |acc, symbol| {
        acc.checked_add(symbol?.value).ok_or(NumeralError::Overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_scenarios() {
        assert_eq!(decode("XVII"), Ok(17));
        assert_eq!(decode("CDIV"), Ok(404));
        assert_eq!(decode("MCMXCIV"), Ok(1994));
        assert_eq!(decode("MMMCMXCIX"), Ok(3999));
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(decode("xvii"), Ok(17));
        assert_eq!(decode("mCmXcIv"), Ok(1994));
    }

    #[test]
    fn test_decode_empty_fails() {
        assert_eq!(decode(""), Err(NumeralError::Empty));
        assert_eq!(tokenize(""), Err(NumeralError::Empty));
    }

    #[test]
    fn test_decode_unknown_symbol_fails() {
        assert_eq!(
            decode("ZZZ"),
            Err(NumeralError::UnrecognizedSymbol {
                position: 0,
                found: 'Z'
            })
        );
        assert_eq!(
            decode("XIVZ"),
            Err(NumeralError::UnrecognizedSymbol {
                position: 3,
                found: 'Z'
            })
        );
        assert!(decode(" XV").is_err());
        assert!(decode("XV ").is_err());
    }

    #[test]
    fn test_decode_accepts_non_canonical_spellings() {
        assert_eq!(decode("IIII"), Ok(4));
        assert_eq!(decode("VX"), Ok(15));
        assert_eq!(decode("IIV"), Ok(5));
        assert_eq!(decode("IM"), Ok(1001));
        assert_eq!(decode("MMMM"), Ok(4000));
        assert_eq!(decode("VV"), Ok(10));
    }

    #[test]
    fn test_subtractive_pairs_win_over_single_letters() {
        assert_eq!(decode("CD"), Ok(400));
        assert_eq!(decode("CM"), Ok(900));
        assert_eq!(decode("XL"), Ok(40));
        assert_eq!(decode("IX"), Ok(9));
        // "XCIX" splits as XC + IX, not X + C + I + X
        assert_eq!(decode("XCIX"), Ok(99));
    }

    #[test]
    fn test_decode_strict_rejects_lower_case() {
        assert_eq!(decode_strict("XVII"), Ok(17));
        assert_eq!(
            decode_strict("XvII"),
            Err(NumeralError::UnrecognizedSymbol {
                position: 1,
                found: 'v'
            })
        );
        assert_eq!(decode_strict(""), Err(NumeralError::Empty));
    }

    #[test]
    fn test_tokenize_trace() {
        let trace = tokenize("cdiv").unwrap();
        let texts: Vec<_> = trace.iter().map(|s| s.text).collect();
        assert_eq!(texts, ["CD", "IV"]);
        assert_eq!(trace.iter().map(|s| s.value).sum::<i64>(), 404);
        assert!(!trace.spilled());
    }

    #[test]
    fn test_error_position_counts_characters() {
        assert_eq!(
            decode("MMé"),
            Err(NumeralError::UnrecognizedSymbol {
                position: 2,
                found: 'É'
            })
        );
        assert_eq!(
            decode_strict("CMé"),
            Err(NumeralError::UnrecognizedSymbol {
                position: 2,
                found: 'é'
            })
        );
    }

    #[test]
    fn test_sum_stops_at_first_error() {
        let mut scanner = SymbolScanner::new("IQXX");
        assert_eq!(
            sum(&mut scanner),
            Err(NumeralError::UnrecognizedSymbol {
                position: 1,
                found: 'Q'
            })
        );
        // Nothing past the failing position was consumed
        assert_eq!(scanner.rest, "QXX");
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_scanner_stops_after_error() {
        let mut scanner = SymbolScanner::new("XQX");
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Err(_))));
        assert!(scanner.next().is_none());
    }
}
