// ============================================================================
// Encoder
// Greedy largest-symbol-first integer to numeral conversion
// ============================================================================

use super::symbols::{ENCODE_ORDER, MAX_ENCODABLE};
use crate::numeral::{NumeralError, NumeralResult};

/// Longest classical numeral below one thousand (DCCCLXXXVIII).
const MAX_BELOW_THOUSAND: usize = 12;

/// Encode a positive integer as its canonical Roman numeral.
///
/// # Panics
/// Panics if `n <= 0` or `n > MAX_ENCODABLE`. Use [`try_encode`] to get a `Result` instead.
///
/// # Example
/// ```
/// assert_eq!(roman_numerals::encode(1018), "MXVIII");
/// ```
pub fn encode(n: i64) -> String {
    match try_encode(n) {
        Ok(numeral) => numeral,
        Err(err) => panic!("cannot encode {}: {}", n, err),
    }
}

/// Checked encoding.
///
/// # Errors
/// - `NonPositive` if `n <= 0`
/// - `OutOfRange` if `n > MAX_ENCODABLE`; nothing is allocated
pub fn try_encode(n: i64) -> NumeralResult<String> {
    if n <= 0 {
        return Err(NumeralError::NonPositive(n));
    }
    if n > MAX_ENCODABLE {
        return Err(NumeralError::OutOfRange {
            value: n,
            max: MAX_ENCODABLE,
        });
    }

    // n <= MAX_ENCODABLE keeps this a small, exact bound
    let thousands = (n / 1000) as usize;
    let mut out = String::with_capacity(thousands + MAX_BELOW_THOUSAND);
    let mut remainder = n;

    for symbol in ENCODE_ORDER.iter() {
        if remainder < symbol.value {
            continue;
        }
        // Same result as appending once per `remainder >= value` pass.
        let count = remainder / symbol.value;
        for _ in 0..count {
            out.push_str(symbol.text);
        }
        remainder -= count * symbol.value;
        if remainder == 0 {
            break;
        }
    }

    tracing::trace!(value = n, numeral = %out, "encoded");
    Ok(out)
}
