use serde::{Deserialize, Serialize};

use crate::event_sourcing::{Dispatch, DomainEvent};
use super::errors::VehicleError;

// ============================================================================
// Vehicle Events
// ============================================================================

/// Union type for all vehicle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum VehicleEvent {
    EngineStarted(EngineStarted),
    EngineStopped(EngineStopped),
    Driven(Driven),
}

impl DomainEvent for VehicleEvent {
    fn event_type(&self) -> &'static str {
        match self {
            VehicleEvent::EngineStarted(_) => "EngineStarted",
            VehicleEvent::EngineStopped(_) => "EngineStopped",
            VehicleEvent::Driven(_) => "Driven",
        }
    }
}

// Individual event types

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineStarted {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineStopped {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driven {
    pub distance_km: u32,
}

// ============================================================================
// Vehicle Visitor
// ============================================================================

pub trait VehicleVisitor {
    fn visit_engine_started(&mut self, event: &EngineStarted) -> Result<(), VehicleError>;

    fn visit_engine_stopped(&mut self, event: &EngineStopped) -> Result<(), VehicleError>;

    fn visit_driven(&mut self, event: &Driven) -> Result<(), VehicleError>;
}

impl<V: VehicleVisitor> Dispatch<V> for VehicleEvent {
    type Error = VehicleError;

    fn dispatch(&self, visitor: &mut V) -> Result<(), Self::Error> {
        match self {
            VehicleEvent::EngineStarted(e) => visitor.visit_engine_started(e),
            VehicleEvent::EngineStopped(e) => visitor.visit_engine_stopped(e),
            VehicleEvent::Driven(e) => visitor.visit_driven(e),
        }
    }
}
