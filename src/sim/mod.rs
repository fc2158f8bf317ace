//! Wave simulation module
//!
//! Everything that evolves or disturbs the height field lives here.
//! This module has no rendering or platform dependencies:
//! - Fixed constants, fixed step count per frame
//! - Seeded RNG only
//! - Single-threaded; all mutation goes through `&mut`

pub mod field;
pub mod frame;
pub mod grid;
pub mod injector;

pub use field::{FieldStats, Snapshot, WaveField};
pub use frame::{FrameInput, PointerEvent, Simulation, frame, seed_initial_ripples};
pub use grid::Grid;
pub use injector::{DisturbanceInjector, MAX_DRAG_STAMPS, stamp};
