use crate::event_sourcing::Aggregate;
use super::errors::VehicleError;
use super::events::*;

// ============================================================================
// Vehicle State - Default Vehicle Visitor
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleState {
    pub engine_running: bool,
    pub odometer_km: u64,
    pub trips: u32,
}

impl VehicleVisitor for VehicleState {
    fn visit_engine_started(&mut self, _event: &EngineStarted) -> Result<(), VehicleError> {
        if self.engine_running {
            return Err(VehicleError::EngineAlreadyRunning);
        }
        self.engine_running = true;
        Ok(())
    }

    fn visit_engine_stopped(&mut self, _event: &EngineStopped) -> Result<(), VehicleError> {
        if !self.engine_running {
            return Err(VehicleError::EngineNotRunning);
        }
        self.engine_running = false;
        Ok(())
    }

    fn visit_driven(&mut self, event: &Driven) -> Result<(), VehicleError> {
        if !self.engine_running {
            return Err(VehicleError::EngineNotRunning);
        }
        self.odometer_km += u64::from(event.distance_km);
        self.trips += 1;
        Ok(())
    }
}

// ============================================================================
// Vehicle Aggregate
// ============================================================================

#[derive(Debug, Clone)]
pub struct Vehicle<V = VehicleState> {
    aggregate: Aggregate<V, VehicleEvent>,
}

impl<V: VehicleVisitor> Vehicle<V> {
    pub fn new(visitor: V) -> Self {
        Self {
            aggregate: Aggregate::new(visitor),
        }
    }

    pub fn start_engine(&mut self) -> Result<(), VehicleError> {
        self.aggregate.apply(VehicleEvent::EngineStarted(EngineStarted {}))?;
        Ok(())
    }

    pub fn stop_engine(&mut self) -> Result<(), VehicleError> {
        self.aggregate.apply(VehicleEvent::EngineStopped(EngineStopped {}))?;
        Ok(())
    }

    pub fn drive(&mut self, distance_km: u32) -> Result<(), VehicleError> {
        if distance_km == 0 {
            return Err(VehicleError::InvalidDistance);
        }
        self.aggregate.apply(VehicleEvent::Driven(Driven { distance_km }))?;
        Ok(())
    }

    pub fn visitor(&self) -> &V {
        self.aggregate.visitor()
    }

    pub fn to_aggregate(&self) -> &Aggregate<V, VehicleEvent> {
        &self.aggregate
    }

    pub fn to_aggregate_mut(&mut self) -> &mut Aggregate<V, VehicleEvent> {
        &mut self.aggregate
    }
}

impl Vehicle<VehicleState> {
    pub fn engine_running(&self) -> bool {
        self.visitor().engine_running
    }

    pub fn odometer_km(&self) -> u64 {
        self.visitor().odometer_km
    }
}

impl Default for Vehicle<VehicleState> {
    fn default() -> Self {
        Self::new(VehicleState::default())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
