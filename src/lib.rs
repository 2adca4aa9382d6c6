// ============================================================================
// Roman Numerals Library
// Integer <-> Roman numeral codec with a numeric value type
// ============================================================================

//! # Roman Numerals
//!
//! Conversion between positive integers and Roman numerals.
//!
//! ## Features
//!
//! - **Greedy encoding** to the canonical minimal numeral
//! - **Prefix-matching decoding**, case-insensitive and deliberately lax
//!   (`"IIII"` decodes to 4)
//! - **`Roman` value type** with comparison and `+ - * / %` operators
//! - **Configurable codecs** with case policy, range limit and event hooks
//!
//! Non-positive integers have no numeral. `Roman::new(0)`, `encode(0)` and
//! operators producing a non-positive result panic; parsing failures are
//! returned as `Err`.
//!
//! ## Example
//!
//! ```rust
//! use roman_numerals::prelude::*;
//!
//! assert_eq!(encode(235), "CCXXXV");
//! assert_eq!(decode("cdiv"), Ok(404));
//!
//! let r8: Roman = "XVII".parse().unwrap();
//! let r9: Roman = "CDIV".parse().unwrap();
//! let r10 = r9 - r8;
//! assert_eq!(r10.numeral(), "CCCLXXXVII");
//!
//! assert!(Roman::from_numeral("ZZZ").is_err());
//! ```

pub mod codec;
pub mod domain;
pub mod interfaces;
pub mod numeral;
pub mod utils;

pub use codec::{decode, encode, tokenize, try_encode};
pub use numeral::{NumeralError, NumeralResult, Roman};

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{
        create_from_config, decode, encode, tokenize, try_encode, RomanCodec, RomanCodecBuilder,
        Symbol, CLASSICAL_MAX,
    };
    pub use crate::domain::{CaseSensitivity, CodecConfig, LetterCase};
    pub use crate::interfaces::{
        CodecEvent, CodecEventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeral::{NumeralError, NumeralResult, Roman};
}
