//! Event Sink Implementations
//!
//! Provides concrete implementations of SelectionEventSink:
//! - JsonEventSink: NDJSON output for scripting

mod json;

pub use json::JsonEventSink;
