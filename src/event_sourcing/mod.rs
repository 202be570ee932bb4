// ============================================================================
// Event Sourcing Infrastructure
// ============================================================================
//
// Generic, reusable event sourcing infrastructure.
// Domain-specific code is in src/domain/
//
// ============================================================================

mod core;

// Re-export core infrastructure
pub use self::core::*;
