// ============================================================================
// Domain Models Module
// Configuration shared by codec instances
// ============================================================================

pub mod config;

pub use config::{CaseSensitivity, CodecConfig, LetterCase};
