// ============================================================================
// Numeral Module
// The Roman value type and the errors shared by the codec
// ============================================================================
//
// This module provides:
// - Roman: a positive integer paired with its numeral spelling
// - NumeralError: Error types for parsing and checked arithmetic
//
// Design principles:
// - Parsing failures are values (Result), never panics
// - Constructing a Roman from a non-positive integer is a programmer error
//   and panics; checked_* siblings exist for callers that want a Result
// - Equality, ordering and hashing look only at the integer

mod errors;
mod roman;

pub use errors::{NumeralError, NumeralResult};
pub use roman::Roman;
