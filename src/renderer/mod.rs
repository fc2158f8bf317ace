//! Rendering boundary
//!
//! The simulation hands one snapshot per frame to a [`RenderSink`]. GPU upload
//! and shading happen behind the sink; this crate only provides a CPU staging
//! buffer in the R32F layout a height texture expects.

pub mod staging;

pub use staging::HeightStaging;

use crate::sim::Snapshot;

/// Consumer of per-frame field snapshots
pub trait RenderSink {
    /// Receive the field for this frame. The snapshot is only valid for the
    /// duration of the call.
    fn present(&mut self, snapshot: Snapshot<'_>);
}
