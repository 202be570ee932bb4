use serde::{Deserialize, Serialize};
use anyhow::Result;

// ============================================================================
// Domain Event Trait
// ============================================================================

/// Generic Domain Event trait
///
/// A domain event is an immutable fact. The core never looks inside it; it
/// only hands it to the aggregate's visitor through [`Dispatch`].
pub trait DomainEvent {
    /// Stable name of the concrete event variant
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// Dispatch - Visitor Double Dispatch
// ============================================================================
//
// Each aggregate declares a closed event enum and a visitor trait with one
// method per event type. The enum implements `Dispatch` with an exhaustive
// match, so an event type without a handler does not compile.
//
// ============================================================================

/// Routes an event to the visitor method for its concrete type.
///
/// Type Parameter:
/// - `V`: the visitor (dispatch capability) that owns the mutable state
pub trait Dispatch<V: ?Sized>: DomainEvent {
    /// Error raised by the visitor's handlers
    type Error;

    fn dispatch(&self, visitor: &mut V) -> Result<(), Self::Error>;
}

// ============================================================================
// Event Serialization Helpers
// ============================================================================
//
// For persistence collaborators. The aggregate itself never serializes.
//
// ============================================================================

pub fn serialize_event<E: Serialize>(event: &E) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}

pub fn deserialize_event<E: for<'de> Deserialize<'de>>(json: &str) -> Result<E> {
    Ok(serde_json::from_str(json)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(tag = "type", content = "data")]
    enum CounterEvent {
        Incremented(u32),
        Reset,
    }

    impl DomainEvent for CounterEvent {
        fn event_type(&self) -> &'static str {
            match self {
                CounterEvent::Incremented(_) => "Incremented",
                CounterEvent::Reset => "Reset",
            }
        }
    }

    trait CounterVisitor {
        fn visit_incremented(&mut self, by: u32);
        fn visit_reset(&mut self);
    }

    impl<V: CounterVisitor> Dispatch<V> for CounterEvent {
        type Error = std::convert::Infallible;

        fn dispatch(&self, visitor: &mut V) -> Result<(), Self::Error> {
            match self {
                CounterEvent::Incremented(by) => visitor.visit_incremented(*by),
                CounterEvent::Reset => visitor.visit_reset(),
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct Counter {
        value: u32,
    }

    impl CounterVisitor for Counter {
        fn visit_incremented(&mut self, by: u32) {
            self.value += by;
        }

        fn visit_reset(&mut self) {
            self.value = 0;
        }
    }

    #[test]
    fn test_dispatch_routes_by_variant() {
        let mut counter = Counter::default();

        CounterEvent::Incremented(3).dispatch(&mut counter).unwrap();
        CounterEvent::Incremented(4).dispatch(&mut counter).unwrap();
        assert_eq!(counter.value, 7);

        CounterEvent::Reset.dispatch(&mut counter).unwrap();
        assert_eq!(counter.value, 0);
    }

    #[test]
    fn test_event_type_names() {
        assert_eq!(CounterEvent::Incremented(1).event_type(), "Incremented");
        assert_eq!(CounterEvent::Reset.event_type(), "Reset");
    }

    #[test]
    fn test_event_serialization() {
        let event = CounterEvent::Incremented(42);

        let json = serialize_event(&event).unwrap();
        assert_eq!(json, r#"{"type":"Incremented","data":42}"#);

        let deserialized: CounterEvent = deserialize_event(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_unknown_event() {
        let result: Result<CounterEvent> = deserialize_event(r#"{"type":"Doubled"}"#);
        assert!(result.is_err());
    }
}
