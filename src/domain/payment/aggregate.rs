use std::borrow::Borrow;

use crate::event_sourcing::Aggregate;
use super::errors::PaymentError;
use super::events::*;
use super::value_objects::{Amount, Currency, PaymentStatus};

// ============================================================================
// Payment State - Visitor for Payment Events
// ============================================================================

/// Current state of a payment (derived from events)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentState {
    pub amount: Amount,
    pub currency: Option<Currency>,
    pub refunded: Amount,
    pub status: PaymentStatus,
}

impl PaymentState {
    /// Amount that can still be refunded
    pub fn refundable(&self) -> Amount {
        self.amount.checked_sub(self.refunded).unwrap_or(Amount::ZERO)
    }
}

impl PaymentVisitor for PaymentState {
    fn visit_payment_taken(&mut self, event: &PaymentTaken) -> Result<(), PaymentError> {
        if self.status != PaymentStatus::Pending {
            return Err(PaymentError::AlreadyTaken);
        }

        self.amount = event.amount;
        self.currency = Some(event.currency.clone());
        self.status = PaymentStatus::Taken;
        Ok(())
    }

    fn visit_payment_refunded(&mut self, event: &PaymentRefunded) -> Result<(), PaymentError> {
        if self.status == PaymentStatus::Pending {
            return Err(PaymentError::NotTaken);
        }

        let available = self.refundable();
        if event.amount > available {
            return Err(PaymentError::RefundExceedsBalance {
                requested: event.amount,
                available,
            });
        }

        self.refunded = self
            .refunded
            .checked_add(event.amount)
            .ok_or(PaymentError::InvalidAmount(event.amount))?;
        self.status = if self.refunded == self.amount {
            PaymentStatus::Refunded
        } else {
            PaymentStatus::PartiallyRefunded
        };
        Ok(())
    }
}

// ============================================================================
// Payment Aggregate - Domain Logic
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Payment {
    aggregate: Aggregate<PaymentState, PaymentEvent>,
}

impl Payment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a payment from stored history
    pub fn from_history<I>(version: u64, events: I) -> Result<Self, PaymentError>
    where
        I: IntoIterator,
        I::Item: Borrow<PaymentEvent>,
    {
        let aggregate = Aggregate::from_history(PaymentState::default(), version, events)?;
        Ok(Self { aggregate })
    }

    /// Take a payment of `amount` in `currency`
    pub fn take_payment(&mut self, amount: Amount, currency: &str) -> Result<(), PaymentError> {
        if !amount.is_positive() {
            return Err(PaymentError::InvalidAmount(amount));
        }
        let currency = Currency::new(currency)?;

        if self.status() != PaymentStatus::Pending {
            return Err(PaymentError::AlreadyTaken);
        }

        self.aggregate.apply(PaymentEvent::Taken(PaymentTaken { amount, currency }))?;
        Ok(())
    }

    /// Refund part or all of a taken payment
    pub fn refund(&mut self, amount: Amount) -> Result<(), PaymentError> {
        if !amount.is_positive() {
            return Err(PaymentError::InvalidAmount(amount));
        }

        // Balance is enforced by the event handler
        self.aggregate.apply(PaymentEvent::Refunded(PaymentRefunded { amount }))?;
        Ok(())
    }

    pub fn amount(&self) -> Amount {
        self.state().amount
    }

    pub fn currency(&self) -> Option<&Currency> {
        self.state().currency.as_ref()
    }

    pub fn refunded(&self) -> Amount {
        self.state().refunded
    }

    pub fn status(&self) -> PaymentStatus {
        self.state().status
    }

    pub fn state(&self) -> &PaymentState {
        self.aggregate.visitor()
    }

    /// The embedded event-sourced core
    pub fn to_aggregate(&self) -> &Aggregate<PaymentState, PaymentEvent> {
        &self.aggregate
    }

    pub fn to_aggregate_mut(&mut self) -> &mut Aggregate<PaymentState, PaymentEvent> {
        &mut self.aggregate
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
