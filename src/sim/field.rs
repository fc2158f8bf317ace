//! Double-buffered wave field and the leapfrog update rule
//!
//! Each `step()` applies the 5-point Laplacian stencil to every interior cell:
//!
//! ```text
//! laplacian  = cur[N] + cur[S] + cur[E] + cur[W] - 4 * cur[here]
//! next[here] = (2 * cur[here] - prev[here] + C_SQUARED * laplacian) * DAMPING
//! ```
//!
//! Border cells are never written by the stencil, so they keep their value and
//! act as a reflecting wall. Damping never reaches them.

use glam::IVec2;

use super::grid::Grid;
use crate::consts::*;

/// Scalar height field evolving under the discretized 2D wave equation
#[derive(Debug, Clone)]
pub struct WaveField {
    /// Heights at simulation time `n`
    current: Grid,
    /// Heights at time `n - 1`, only written during rotation and reset
    previous: Grid,
    /// Scratch buffer the next generation is computed into
    next: Grid,
    /// Number of steps taken since creation or the last reset
    steps: u64,
}

impl Default for WaveField {
    fn default() -> Self {
        Self::new(GRID_W, GRID_H)
    }
}

impl WaveField {
    /// Create a zeroed field of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            current: Grid::new(width, height),
            previous: Grid::new(width, height),
            next: Grid::new(width, height),
            steps: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.current.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.current.height()
    }

    /// Steps taken since creation or the last reset
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Current height at `(x, y)`
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.current.get(x, y)
    }

    /// Whether `(x, y)` lies inside the grid
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.current.contains(IVec2::new(x, y))
    }

    /// Advance the simulation by one fixed time unit
    pub fn step(&mut self) {
        let w = self.current.width();
        let h = self.current.height();

        // Border cells carry over untouched
        self.next.copy_from(&self.current);

        if w >= 3 && h >= 3 {
            let grid = &self.current;
            let cur = self.current.as_slice();
            let prev = self.previous.as_slice();
            let next = self.next.as_mut_slice();

            for y in 1..h - 1 {
                for x in 1..w - 1 {
                    let i = grid.index(x, y);
                    let laplacian = cur[i - w] + cur[i + w] + cur[i + 1] + cur[i - 1] - 4.0 * cur[i];
                    next[i] = (2.0 * cur[i] - prev[i] + C_SQUARED * laplacian) * DAMPING;
                }
            }
        }

        // previous <- current, current <- next; the old previous becomes scratch
        std::mem::swap(&mut self.previous, &mut self.current);
        std::mem::swap(&mut self.current, &mut self.next);
        self.steps += 1;
    }

    /// Add `strength` to the current buffer at `(x, y)`.
    ///
    /// Coordinates outside the grid and non-finite strengths are ignored.
    pub fn add_at(&mut self, x: i32, y: i32, strength: f32) {
        if !strength.is_finite() {
            log::trace!("Ignoring non-finite disturbance {} at ({}, {})", strength, x, y);
            return;
        }
        if let Some(i) = self.current.checked_index(IVec2::new(x, y)) {
            self.current.as_mut_slice()[i] += strength;
        }
    }

    /// Zero both buffers
    pub fn reset(&mut self) {
        self.current.fill(0.0);
        self.previous.fill(0.0);
        self.steps = 0;
    }

    /// Read-only view of the current buffer for the render sink.
    ///
    /// The view borrows the field, so it cannot outlive the next `step`,
    /// `add_at` or `reset`. Use [`Snapshot::to_vec`] to keep a copy.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            width: self.current.width(),
            height: self.current.height(),
            cells: self.current.as_slice(),
        }
    }
}

/// Borrowed view of a field generation
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    width: usize,
    height: usize,
    cells: &'a [f32],
}

impl<'a> Snapshot<'a> {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Heights in row-major order
    pub fn as_slice(&self) -> &'a [f32] {
        self.cells
    }

    /// Iterate rows from `y = 0` upward
    pub fn rows(&self) -> impl Iterator<Item = &'a [f32]> + 'a {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Owned copy that survives further mutation of the field
    pub fn to_vec(&self) -> Vec<f32> {
        self.cells.to_vec()
    }

    pub fn stats(&self) -> FieldStats {
        FieldStats::from_cells(self.cells)
    }
}

/// Summary statistics of a field generation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldStats {
    pub min: f32,
    pub max: f32,
    /// Largest absolute height
    pub max_abs: f32,
    /// Sum of squared heights (a proxy for potential energy)
    pub energy: f32,
}

impl FieldStats {
    pub fn from_cells(cells: &[f32]) -> Self {
        if cells.is_empty() {
            return Self::default();
        }
        let mut stats = Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
            max_abs: 0.0,
            energy: 0.0,
        };
        for &v in cells {
            stats.min = stats.min.min(v);
            stats.max = stats.max.max(v);
            stats.max_abs = stats.max_abs.max(v.abs());
            stats.energy += v * v;
        }
        stats
    }
}
