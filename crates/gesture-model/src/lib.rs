//! Swipe Gesture Model
//!
//! Defines the data contracts shared by the tracker and its consumers:
//! - **Events:** Raw touch transitions (start, move, end, cancel)
//! - **Geometry:** Points in whatever unit the input source reports
//! - **Telemetry:** The record published on the `swipe` channel
//!
//! Coordinates are passed through untouched. Screen Y grows downward.

pub mod event;
pub mod geometry;
pub mod telemetry;

pub use event::*;
pub use geometry::*;
pub use telemetry::*;
