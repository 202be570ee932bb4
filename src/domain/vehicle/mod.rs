// ============================================================================
// Vehicle Domain - Business Logic for Vehicle Aggregate
// ============================================================================
//
// Unlike Payment, the Vehicle's visitor is injected, so any VehicleVisitor
// (VehicleState by default) can receive its events.
//
// ============================================================================

pub mod events;
pub mod errors;
pub mod aggregate;

pub use events::*;
pub use errors::*;
pub use aggregate::*;
