//! Disturbance injection
//!
//! Turns taps and drag gestures into cone-shaped stamps on the wave field.
//! Drags are interpolated so a pointer moving several cells per frame still
//! leaves a continuous stroke.

use glam::IVec2;

use super::field::WaveField;
use crate::cell_distance;
use crate::consts::*;

/// Upper bound on interpolated stamps for a single pointer move
pub const MAX_DRAG_STAMPS: u32 = 1024;

/// Add a cone of height `strength` centred on `(cx, cy)`.
///
/// Every cell closer than `radius` receives `strength * (1 - d / radius)`.
/// Cells outside the grid are skipped.
pub fn stamp(field: &mut WaveField, cx: i32, cy: i32, strength: f32, radius: f32) {
    if !strength.is_finite() || !radius.is_finite() || radius <= 0.0 {
        log::debug!("Ignoring stamp at ({}, {}): strength={} radius={}", cx, cy, strength, radius);
        return;
    }
    if field.width() == 0 || field.height() == 0 {
        return;
    }

    // Clip the kernel's bounding box to the grid
    let reach = radius.ceil() as i32;
    let x0 = cx.saturating_sub(reach).max(0);
    let y0 = cy.saturating_sub(reach).max(0);
    let x1 = cx.saturating_add(reach).min(field.width() as i32 - 1);
    let y1 = cy.saturating_add(reach).min(field.height() as i32 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = cell_distance(x, y, cx, cy);
            if d < radius {
                field.add_at(x, y, strength * (1.0 - d / radius));
            }
        }
    }
}

/// Tracks the active gesture and stamps the field for pointer events
#[derive(Debug, Clone)]
pub struct DisturbanceInjector {
    /// Stamp kernel radius (cells)
    radius: f32,
    /// Last stamped point of the active gesture
    last: Option<IVec2>,
}

impl Default for DisturbanceInjector {
    fn default() -> Self {
        Self::new(STAMP_RADIUS)
    }
}

impl DisturbanceInjector {
    pub fn new(radius: f32) -> Self {
        Self { radius, last: None }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether a gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    /// Last point recorded for the active gesture
    pub fn last_point(&self) -> Option<IVec2> {
        self.last
    }

    /// Stamp at full strength and start a new gesture at `(x, y)`
    pub fn on_pointer_down(&mut self, field: &mut WaveField, x: i32, y: i32, strength: f32) {
        stamp(field, x, y, strength, self.radius);
        self.last = Some(IVec2::new(x, y));
    }

    /// Stamp along the segment from the last point to `(x, y)`.
    ///
    /// Places `ceil(distance)` evenly spaced stamps, endpoint included, each
    /// at `DRAG_STRENGTH_FACTOR * strength`. Moves outside a gesture are
    /// ignored.
    pub fn on_pointer_move(&mut self, field: &mut WaveField, x: i32, y: i32, strength: f32) {
        let Some(last) = self.last else {
            log::trace!("Pointer move to ({}, {}) without an active gesture", x, y);
            return;
        };

        let target = IVec2::new(x, y);
        let start = last.as_vec2();
        let delta = target.as_vec2() - start;
        let steps = (delta.length().ceil() as u32).min(MAX_DRAG_STAMPS);
        let drag_strength = strength * DRAG_STRENGTH_FACTOR;

        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let p = (start + delta * t).round();
            stamp(field, p.x as i32, p.y as i32, drag_strength, self.radius);
        }

        self.last = Some(target);
    }

    /// End the gesture so the next press does not interpolate from here
    pub fn on_pointer_up(&mut self) {
        self.last = None;
    }
}
