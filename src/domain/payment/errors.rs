use crate::event_sourcing::AggregateError;
use super::value_objects::Amount;

// ============================================================================
// Payment Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment amount must be positive, got {0}")]
    InvalidAmount(Amount),

    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),

    #[error("Payment has already been taken")]
    AlreadyTaken,

    #[error("No payment has been taken")]
    NotTaken,

    #[error("Refund of {requested} exceeds refundable balance of {available}")]
    RefundExceedsBalance { requested: Amount, available: Amount },

    #[error("Cannot apply an absent event")]
    MissingEvent,
}

impl From<AggregateError<PaymentError>> for PaymentError {
    fn from(err: AggregateError<PaymentError>) -> Self {
        match err {
            AggregateError::InvalidArgument => PaymentError::MissingEvent,
            AggregateError::Dispatch(e) => e,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid amount: {0:?}")]
pub struct ParseAmountError(pub String);
