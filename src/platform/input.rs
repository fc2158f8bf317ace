//! Input glue for the frame driver
//!
//! Hosts deliver mouse and key state in window coordinates, often as level
//! (held) state. These helpers turn that into the discrete grid-space events
//! the simulation consumes.

use glam::{IVec2, UVec2, Vec2};

use crate::sim::PointerEvent;

/// Map a window-space position to a grid cell.
///
/// `grid = floor(pos / window * grid_size)`. The result may lie off the grid
/// when the cursor leaves the window; the field ignores such cells. Returns
/// `None` for a degenerate window or a non-finite position.
pub fn window_to_grid(pos: Vec2, window: Vec2, grid: UVec2) -> Option<IVec2> {
    if !(window.x > 0.0 && window.y > 0.0) || !pos.is_finite() {
        return None;
    }
    let cell = (pos / window * grid.as_vec2()).floor();
    Some(cell.as_ivec2())
}

/// Rising-edge detector for a held key
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyLatch {
    held: bool,
}

impl KeyLatch {
    /// Feed the current key state; true only on the frame it goes down
    pub fn update(&mut self, pressed: bool) -> bool {
        let fired = pressed && !self.held;
        self.held = pressed;
        fired
    }
}

/// Tracks mouse button and cursor state, producing grid pointer events
#[derive(Debug, Clone)]
pub struct PointerTracker {
    grid: UVec2,
    window: Vec2,
    cursor: Vec2,
    pressed: bool,
    last_cell: Option<IVec2>,
}

impl PointerTracker {
    pub fn new(grid: UVec2, window: Vec2) -> Self {
        Self {
            grid,
            window,
            cursor: Vec2::ZERO,
            pressed: false,
            last_cell: None,
        }
    }

    pub fn set_window_size(&mut self, window: Vec2) {
        self.window = window;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Primary button changed state
    pub fn button(&mut self, pressed: bool) -> Option<PointerEvent> {
        if pressed == self.pressed {
            return None;
        }
        self.pressed = pressed;

        if pressed {
            let cell = window_to_grid(self.cursor, self.window, self.grid)?;
            self.last_cell = Some(cell);
            Some(PointerEvent::Down(cell))
        } else {
            self.last_cell = None;
            Some(PointerEvent::Up)
        }
    }

    /// Cursor moved to `pos` (window coordinates)
    pub fn cursor(&mut self, pos: Vec2) -> Option<PointerEvent> {
        self.cursor = pos;
        if !self.pressed {
            return None;
        }

        let cell = window_to_grid(pos, self.window, self.grid)?;
        if self.last_cell == Some(cell) {
            return None;
        }

        let event = if self.last_cell.is_some() {
            PointerEvent::Move(cell)
        } else {
            // Press landed while the window was degenerate; start the gesture here
            PointerEvent::Down(cell)
        };
        self.last_cell = Some(cell);
        Some(event)
    }
}
