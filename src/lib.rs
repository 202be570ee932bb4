//! Minimal event sourcing building block.
//!
//! [`event_sourcing::Aggregate`] derives state by dispatching domain events
//! to a visitor, buffers newly applied events as uncommitted, and can be
//! rebuilt from stored history while remembering the version it was loaded
//! at. The `domain` module holds two concrete aggregates built on it.

pub mod event_sourcing;
pub mod domain;
