//! Fixed-size scalar grid
//!
//! Cells are stored in one contiguous buffer, row-major: `index = y * width + x`.
//! The stencil in `field.rs` relies on this flattening for neighbour lookups.

use glam::{IVec2, UVec2};

/// A `width × height` field of `f32` heights
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<f32>,
}

impl Grid {
    /// Create a zero-filled grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0.0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width as u32, self.height as u32)
    }

    /// Row-major flat index of `(x, y)`
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Flat index of a signed coordinate, `None` when it lies off the grid
    #[inline]
    pub fn checked_index(&self, cell: IVec2) -> Option<usize> {
        if self.contains(cell) {
            Some(self.index(cell.x as usize, cell.y as usize))
        } else {
            None
        }
    }

    /// Whether a signed coordinate lies inside `[0, width) × [0, height)`
    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.width && (cell.y as usize) < self.height
    }

    /// Whether all four axis neighbours of `(x, y)` are in bounds
    #[inline]
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x > 0 && y > 0 && x + 1 < self.width && y + 1 < self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.index(x, y);
        self.cells[i] = value;
    }

    pub fn fill(&mut self, value: f32) {
        self.cells.fill(value);
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.cells
    }

    /// Copy every cell from a grid of the same dimensions
    pub fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!(self.size(), other.size());
        self.cells.copy_from_slice(&other.cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_indexing() {
        let g = Grid::new(4, 3);
        assert_eq!(g.index(0, 0), 0);
        assert_eq!(g.index(1, 0), 1);
        assert_eq!(g.index(0, 1), 4);
        assert_eq!(g.index(3, 2), 11);
        assert_eq!(g.as_slice().len(), 12);
    }

    #[test]
    fn test_contains_rejects_off_grid() {
        let g = Grid::new(4, 3);
        assert!(g.contains(IVec2::new(0, 0)));
        assert!(g.contains(IVec2::new(3, 2)));
        assert!(!g.contains(IVec2::new(-1, 0)));
        assert!(!g.contains(IVec2::new(0, -1)));
        assert!(!g.contains(IVec2::new(4, 0)));
        assert!(!g.contains(IVec2::new(0, 3)));
        assert_eq!(g.checked_index(IVec2::new(4, 3)), None);
        assert_eq!(g.checked_index(IVec2::new(2, 1)), Some(6));
    }

    #[test]
    fn test_interior_excludes_border() {
        let g = Grid::new(4, 4);
        assert!(!g.is_interior(0, 1));
        assert!(!g.is_interior(3, 1));
        assert!(!g.is_interior(1, 0));
        assert!(!g.is_interior(1, 3));
        assert!(g.is_interior(1, 1));
        assert!(g.is_interior(2, 2));
    }

    #[test]
    fn test_set_get_fill() {
        let mut g = Grid::new(3, 3);
        g.set(2, 1, 1.5);
        assert_eq!(g.get(2, 1), 1.5);
        assert_eq!(g.as_slice()[5], 1.5);
        g.fill(0.0);
        assert!(g.as_slice().iter().all(|&v| v == 0.0));
    }
}
