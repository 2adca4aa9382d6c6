// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;

pub use event_handler::{CodecEvent, CodecEventHandler, LoggingEventHandler, NoOpEventHandler};
