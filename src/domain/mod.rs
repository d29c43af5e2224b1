//! Domain Layer
//!
//! The core of Cascader - selection trees and the algorithms over them,
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Node, Tree, RawNode
//! - `services/` - traversal, checked-state, cascade and aggregation logic
//! - `ports/` - Interface definitions for infrastructure (selection events)

pub mod entities;
pub mod ports;
pub mod services;
