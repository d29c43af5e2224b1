//! Scenario tests for Cascader.
//!
//! Scenarios test complete user workflows end-to-end.
//! Each scenario represents a real user journey.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/region_picker.rs"]
mod region_picker;

#[path = "scenarios/filter_bar.rs"]
mod filter_bar;
