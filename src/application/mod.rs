//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//!
//! ## Use Cases
//!
//! - `MenuBar` - Groups of trees: shape policy, cascade sessions, aggregation

pub mod menu_bar;

pub use menu_bar::{DepthLimits, MenuBar};
