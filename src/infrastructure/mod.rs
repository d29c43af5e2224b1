//! Infrastructure Layer
//!
//! Concrete I/O around the domain: reading tree documents and writing
//! selection events.

pub mod events;
pub mod loader;

pub use events::JsonEventSink;
pub use loader::{load_trees, parse_trees};
