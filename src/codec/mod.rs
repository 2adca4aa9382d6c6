// ============================================================================
// Codec Module
// Integer <-> numeral conversion
// ============================================================================

mod decoder;
mod encoder;
mod roman_codec;
mod symbols;

pub mod factory;

pub use decoder::{decode, decode_strict, tokenize, SymbolScanner, SymbolTrace};
pub use encoder::{encode, try_encode};
pub use factory::{create_from_config, RomanCodecBuilder};
pub use roman_codec::RomanCodec;
pub use symbols::{Symbol, CLASSICAL_MAX, DECODE_ORDER, ENCODE_ORDER, MAX_ENCODABLE};
