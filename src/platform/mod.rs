//! Platform abstraction layer
//!
//! Handles native concerns the simulation must not touch:
//! - Wall-clock time and the fixed frame budget

pub mod time;

pub use time::FrameClock;
