// ============================================================================
// Payment Domain - Business Logic for Payment Aggregate
// ============================================================================
//
// This module contains ALL Payment-specific code:
// - Value objects (Amount, Currency, PaymentStatus)
// - Events (PaymentTaken, PaymentRefunded) and the PaymentVisitor
// - Errors (PaymentError enum)
// - Aggregate (Payment, backed by PaymentState)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use errors::*;
pub use aggregate::*;
