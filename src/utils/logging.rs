// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries and tests embedding the codec
// ============================================================================

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "roman_numerals=info";

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "logging")]
pub fn init_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
