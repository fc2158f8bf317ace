//! Platform abstraction layer
//!
//! Glue between the host window and the simulation:
//! - Window → grid coordinate mapping
//! - Edge-triggering of held keys
//! - Raw mouse callbacks → grid pointer events

pub mod input;

pub use input::{KeyLatch, PointerTracker, window_to_grid};
