// ============================================================================
// Aggregate Core Errors
// ============================================================================

/// Failure raised while applying or replaying events.
///
/// Type Parameter:
/// - `E`: the error type of the aggregate's event handlers
#[derive(Debug, thiserror::Error)]
pub enum AggregateError<E> {
    #[error("Cannot apply an absent event")]
    InvalidArgument,

    #[error("Event handler failed: {0}")]
    Dispatch(#[source] E),
}

impl<E> AggregateError<E> {
    /// The handler error, if this is a dispatch failure
    pub fn into_dispatch(self) -> Option<E> {
        match self {
            AggregateError::InvalidArgument => None,
            AggregateError::Dispatch(e) => Some(e),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AggregateError::InvalidArgument)
    }
}
