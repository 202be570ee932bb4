use std::borrow::Borrow;

use super::errors::AggregateError;
use super::event::Dispatch;

// ============================================================================
// Aggregate - Event Sourcing Core
// ============================================================================
//
// Key Principles:
// 1. State is derived from events only (the visitor holds it)
// 2. New events are applied AND buffered as uncommitted
// 3. Replayed history is applied but never buffered
// 4. loaded_at_version changes only through replay
//
// Concrete aggregates embed an `Aggregate` and expose domain commands that
// build an event and call `apply`.
//
// ============================================================================

/// Generic event-sourced state, embedded in concrete aggregates.
///
/// Type Parameters:
/// - `V`: the visitor (dispatch capability) that owns the aggregate state
/// - `E`: the aggregate's closed event type
#[derive(Debug, Clone)]
pub struct Aggregate<V, E> {
    visitor: V,
    loaded_at_version: u64,
    uncommitted_events: Vec<E>,
}

impl<V, E> Aggregate<V, E>
where
    E: Dispatch<V>,
{
    /// Fresh aggregate: version 0, nothing uncommitted
    pub fn new(visitor: V) -> Self {
        Self {
            visitor,
            loaded_at_version: 0,
            uncommitted_events: Vec::new(),
        }
    }

    /// Rebuild an aggregate from stored history
    pub fn from_history<I>(visitor: V, version: u64, events: I) -> Result<Self, AggregateError<E::Error>>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let mut aggregate = Self::new(visitor);
        aggregate.replay(version, events)?;
        Ok(aggregate)
    }

    /// Apply a newly produced event and record it as uncommitted.
    ///
    /// `None` is rejected with `InvalidArgument` before anything is touched.
    /// If the handler fails, the event is not recorded.
    pub fn apply(&mut self, event: impl Into<Option<E>>) -> Result<(), AggregateError<E::Error>> {
        let event = event.into().ok_or(AggregateError::InvalidArgument)?;

        event
            .dispatch(&mut self.visitor)
            .map_err(AggregateError::Dispatch)?;

        tracing::trace!(
            event_type = event.event_type(),
            uncommitted = self.uncommitted_events.len() + 1,
            "Applied event"
        );

        self.uncommitted_events.push(event);
        Ok(())
    }

    /// Re-apply stored history without recording it.
    ///
    /// `loaded_at_version` is set once, after every event has been applied.
    /// On a handler failure the events before it keep their effect and the
    /// version is left untouched.
    pub fn replay<I>(&mut self, version: u64, events: I) -> Result<(), AggregateError<E::Error>>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let mut event_count = 0usize;

        for event in events {
            let event: &E = event.borrow();
            event
                .dispatch(&mut self.visitor)
                .map_err(AggregateError::Dispatch)?;
            event_count += 1;
        }

        self.loaded_at_version = version;

        tracing::debug!(version, event_count, "Replayed event history");

        Ok(())
    }
}

impl<V, E> Aggregate<V, E> {
    /// Events applied since construction or the last clear, in order
    pub fn uncommitted_events(&self) -> &[E] {
        &self.uncommitted_events
    }

    pub fn has_uncommitted_events(&self) -> bool {
        !self.uncommitted_events.is_empty()
    }

    /// Empty the uncommitted buffer. Safe to call repeatedly.
    pub fn clear_uncommitted_events(&mut self) {
        if !self.uncommitted_events.is_empty() {
            tracing::trace!(cleared = self.uncommitted_events.len(), "Cleared uncommitted events");
        }
        self.uncommitted_events.clear();
    }

    /// Hand the uncommitted events to a persistence collaborator, leaving
    /// the buffer empty
    pub fn take_uncommitted_events(&mut self) -> Vec<E> {
        std::mem::take(&mut self.uncommitted_events)
    }

    /// Version this aggregate was last replayed at (0 if never replayed)
    pub fn loaded_at_version(&self) -> u64 {
        self.loaded_at_version
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }
}

impl<V: Default, E: Dispatch<V>> Default for Aggregate<V, E> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
