// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Concrete aggregates built on the generic event sourcing core.
// Each aggregate has its own subdirectory with:
// - Events and the aggregate's visitor trait
// - Errors
// - Aggregate implementation (state visitor + commands)
//
// ============================================================================

pub mod payment;
pub mod vehicle;
