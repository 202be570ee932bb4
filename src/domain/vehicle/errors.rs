use crate::event_sourcing::AggregateError;

// ============================================================================
// Vehicle Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VehicleError {
    #[error("Engine is already running")]
    EngineAlreadyRunning,

    #[error("Engine is not running")]
    EngineNotRunning,

    #[error("Distance must be positive")]
    InvalidDistance,

    #[error("Cannot apply an absent event")]
    MissingEvent,
}

impl From<AggregateError<VehicleError>> for VehicleError {
    fn from(err: AggregateError<VehicleError>) -> Self {
        match err {
            AggregateError::InvalidArgument => VehicleError::MissingEvent,
            AggregateError::Dispatch(e) => e,
        }
    }
}
