//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod selection_events;

pub use selection_events::{NoopEventSink, SelectionEvent, SelectionEventSink};
