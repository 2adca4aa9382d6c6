// ============================================================================
// Utilities Module
// Ambient helpers that are not part of the codec itself
// ============================================================================

mod logging;

pub use logging::DEFAULT_FILTER;

#[cfg(feature = "logging")]
pub use logging::init_logging;
