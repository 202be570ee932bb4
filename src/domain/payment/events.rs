use serde::{Deserialize, Serialize};

use crate::event_sourcing::{Dispatch, DomainEvent};
use super::errors::PaymentError;
use super::value_objects::{Amount, Currency};

// ============================================================================
// Payment Events - Domain Events for Payment Aggregate
// ============================================================================

/// Payment Event - Union type for all payment events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PaymentEvent {
    Taken(PaymentTaken),
    Refunded(PaymentRefunded),
}

impl DomainEvent for PaymentEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PaymentEvent::Taken(_) => "PaymentTaken",
            PaymentEvent::Refunded(_) => "PaymentRefunded",
        }
    }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Payment Taken - Money collected from the payer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentTaken {
    pub amount: Amount,
    pub currency: Currency,
}

/// Payment Refunded - Part or all of the taken amount returned
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentRefunded {
    pub amount: Amount,
}

impl From<PaymentTaken> for PaymentEvent {
    fn from(event: PaymentTaken) -> Self {
        PaymentEvent::Taken(event)
    }
}

impl From<PaymentRefunded> for PaymentEvent {
    fn from(event: PaymentRefunded) -> Self {
        PaymentEvent::Refunded(event)
    }
}

// ============================================================================
// Payment Visitor
// ============================================================================

/// One handler per payment event type
pub trait PaymentVisitor {
    fn visit_payment_taken(&mut self, event: &PaymentTaken) -> Result<(), PaymentError>;

    fn visit_payment_refunded(&mut self, event: &PaymentRefunded) -> Result<(), PaymentError>;
}

impl<V: PaymentVisitor> Dispatch<V> for PaymentEvent {
    type Error = PaymentError;

    fn dispatch(&self, visitor: &mut V) -> Result<(), Self::Error> {
        match self {
            PaymentEvent::Taken(e) => visitor.visit_payment_taken(e),
            PaymentEvent::Refunded(e) => visitor.visit_payment_refunded(e),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_types() {
        let taken = PaymentEvent::from(PaymentTaken {
            amount: Amount::from_minor_units(10_000),
            currency: Currency::new("USD").unwrap(),
        });
        let refunded = PaymentEvent::from(PaymentRefunded {
            amount: Amount::from_minor_units(500),
        });

        assert_eq!(taken.event_type(), "PaymentTaken");
        assert_eq!(refunded.event_type(), "PaymentRefunded");
    }

    #[test]
    fn test_payment_taken_wire_format() {
        let event = PaymentEvent::Taken(PaymentTaken {
            amount: Amount::from_minor_units(10_000),
            currency: Currency::new("USD").unwrap(),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Taken",
                "data": { "amount": 10000, "currency": "USD" }
            })
        );

        let deserialized: PaymentEvent = serde_json::from_value(json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_stored_event_with_bad_currency_is_rejected() {
        let json = r#"{"type":"Taken","data":{"amount":100,"currency":"dollars"}}"#;
        assert!(serde_json::from_str::<PaymentEvent>(json).is_err());
    }
}
