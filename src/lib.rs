//! Ripple Tank - an interactive 2D wave-equation simulator
//!
//! Core modules:
//! - `sim`: Wave field, disturbance injection and the per-frame driver
//! - `renderer`: Render sink interface and R32F staging for texture upload
//! - `platform`: Window/input glue (coordinate mapping, key edge triggers)
//! - `settings`: JSON-persisted frame driver settings

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Grid dimensions (cells)
    pub const GRID_W: usize = 256;
    pub const GRID_H: usize = 256;

    /// Wave speed squared in cell units. Must stay below 0.5 for the
    /// 5-point leapfrog scheme to remain stable.
    pub const C_SQUARED: f32 = 0.25;
    /// Per-step multiplicative damping applied to every updated cell
    pub const DAMPING: f32 = 0.998;

    /// Stamp kernel radius (cells)
    pub const STAMP_RADIUS: f32 = 8.0;
    /// Upper bound for a configured stamp radius
    pub const MAX_STAMP_RADIUS: f32 = 64.0;
    /// Fraction of the contact strength used for interpolated drag stamps
    pub const DRAG_STRENGTH_FACTOR: f32 = 0.5;

    /// Simulation steps per rendered frame
    pub const SUBSTEPS_PER_FRAME: u32 = 3;
    /// Maximum substeps per frame
    pub const MAX_SUBSTEPS: u32 = 16;

    /// Strength of a pointer tap
    pub const POINTER_STRENGTH: f32 = 0.8;
    /// Strength of the random ripple trigger
    pub const RANDOM_RIPPLE_STRENGTH: f32 = 2.0;
    /// Startup ripples: centre and the two diagonal quarter points
    pub const INITIAL_CENTER_STRENGTH: f32 = 3.0;
    pub const INITIAL_QUARTER_STRENGTH: f32 = 2.0;

    /// Magnitude the render staging clamps heights to
    pub const MAX_RENDER_HEIGHT: f32 = 16.0;
}

/// Euclidean distance between two grid cells
#[inline]
pub fn cell_distance(ax: i32, ay: i32, bx: i32, by: i32) -> f32 {
    let dx = (ax - bx) as f32;
    let dy = (ay - by) as f32;
    (dx * dx + dy * dy).sqrt()
}
