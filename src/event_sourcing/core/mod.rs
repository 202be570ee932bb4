// ============================================================================
// Event Sourcing Core - Generic Infrastructure Abstractions
// ============================================================================
//
// GENERIC aggregate machinery that works with ANY domain aggregate:
// - No domain-specific code (no Payment, Vehicle, etc.)
// - Generic over the visitor and event types
// - No I/O, no serialization of aggregates
//
// ============================================================================

pub mod aggregate;
pub mod errors;
pub mod event;

// Re-export core types for convenience
pub use aggregate::Aggregate;
pub use errors::AggregateError;
pub use event::{DomainEvent, Dispatch, serialize_event, deserialize_event};
