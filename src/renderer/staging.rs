//! CPU staging for the height texture
//!
//! Copies each snapshot into a single-channel float buffer, clamping heights so
//! an unstable or runaway field cannot push NaN/inf into the texture.

use super::RenderSink;
use crate::consts::MAX_RENDER_HEIGHT;
use crate::sim::{FieldStats, Snapshot};

/// R32F texel buffer refreshed once per frame
#[derive(Debug, Clone, Default)]
pub struct HeightStaging {
    width: usize,
    height: usize,
    texels: Vec<f32>,
    /// Stats of the last presented (unclamped) snapshot
    stats: FieldStats,
    frames_presented: u64,
}

impl HeightStaging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn stats(&self) -> FieldStats {
        self.stats
    }

    /// Clamped heights, row-major
    pub fn texels(&self) -> &[f32] {
        &self.texels
    }

    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> f32 {
        self.texels[y * self.width + x]
    }

    /// Raw bytes for a `R32Float` texture upload
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    /// Bytes per texture row
    pub fn bytes_per_row(&self) -> u32 {
        (self.width * std::mem::size_of::<f32>()) as u32
    }

    fn clamp_height(h: f32) -> f32 {
        if h.is_nan() {
            0.0
        } else {
            h.clamp(-MAX_RENDER_HEIGHT, MAX_RENDER_HEIGHT)
        }
    }
}

impl RenderSink for HeightStaging {
    fn present(&mut self, snapshot: Snapshot<'_>) {
        if snapshot.width() != self.width || snapshot.height() != self.height {
            log::info!("Height staging resized to {}x{}", snapshot.width(), snapshot.height());
            self.width = snapshot.width();
            self.height = snapshot.height();
        }

        self.texels.clear();
        self.texels.extend(snapshot.as_slice().iter().map(|&h| Self::clamp_height(h)));
        self.stats = snapshot.stats();
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::WaveField;

    #[test]
    fn test_present_copies_field() {
        let mut field = WaveField::new(4, 3);
        field.add_at(1, 2, 0.75);
        field.add_at(3, 0, -0.5);

        let mut staging = HeightStaging::new();
        staging.present(field.snapshot());

        assert_eq!(staging.width(), 4);
        assert_eq!(staging.height(), 3);
        assert_eq!(staging.texel(1, 2), 0.75);
        assert_eq!(staging.texel(3, 0), -0.5);
        assert_eq!(staging.frames_presented(), 1);
        assert_eq!(staging.stats().max_abs, 0.75);
    }

    #[test]
    fn test_copy_survives_field_mutation() {
        let mut field = WaveField::new(8, 8);
        field.add_at(4, 4, 1.0);
        let mut staging = HeightStaging::new();
        staging.present(field.snapshot());

        field.reset();
        assert_eq!(staging.texel(4, 4), 1.0);
    }

    #[test]
    fn test_heights_are_clamped() {
        let mut field = WaveField::new(4, 1);
        field.add_at(0, 0, 1000.0);
        field.add_at(1, 0, -1000.0);
        let mut staging = HeightStaging::new();
        staging.present(field.snapshot());

        assert_eq!(staging.texel(0, 0), MAX_RENDER_HEIGHT);
        assert_eq!(staging.texel(1, 0), -MAX_RENDER_HEIGHT);
        // Stats describe the raw field
        assert_eq!(staging.stats().max_abs, 1000.0);
    }

    #[test]
    fn test_byte_layout() {
        let mut field = WaveField::new(5, 2);
        field.add_at(0, 0, 1.0);
        let mut staging = HeightStaging::new();
        staging.present(field.snapshot());

        assert_eq!(staging.bytes().len(), 5 * 2 * 4);
        assert_eq!(staging.bytes_per_row(), 20);
        assert_eq!(&staging.bytes()[0..4], &1.0f32.to_ne_bytes());
    }
}
