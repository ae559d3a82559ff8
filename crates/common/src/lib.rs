//! Swipe Common Utilities
//!
//! Shared infrastructure for all swipe crates:
//! - Error types and result aliases
//! - Event clocks for stamping touch transitions
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
