//! Per-frame simulation driver
//!
//! One frame applies, in order: the reset trigger, pointer events, the random
//! ripple trigger, then a fixed number of wave steps. The returned snapshot
//! therefore always reflects a fully rotated field with every disturbance of
//! the frame applied.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::field::{Snapshot, WaveField};
use super::injector::{DisturbanceInjector, stamp};
use crate::Settings;
use crate::consts::*;

/// Grid-space pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(IVec2),
    Move(IVec2),
    Up,
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer events in arrival order
    pub pointer: Vec<PointerEvent>,
    /// Clear the field before anything else
    pub reset: bool,
    /// Stamp a ripple at a random cell
    pub random_ripple: bool,
}

/// Wave field plus the state needed to drive it from user input
#[derive(Debug, Clone)]
pub struct Simulation {
    pub field: WaveField,
    pub injector: DisturbanceInjector,
    /// Seed the random ripple RNG was created from
    pub seed: u64,
    /// Frames advanced so far
    pub frame_count: u64,
    rng: Pcg32,
}

impl Simulation {
    /// Create a full-size simulation
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self::with_size(GRID_W, GRID_H, settings, seed)
    }

    pub fn with_size(width: usize, height: usize, settings: &Settings, seed: u64) -> Self {
        Self {
            field: WaveField::new(width, height),
            injector: DisturbanceInjector::new(settings.effective_stamp_radius()),
            seed,
            frame_count: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Clear the field and drop any gesture in progress
    pub fn reset(&mut self) {
        self.field.reset();
        self.injector.on_pointer_up();
        log::info!("Simulation reset at frame {}", self.frame_count);
    }

    /// Stamp a ripple at a uniformly random in-bounds cell
    pub fn random_ripple(&mut self, strength: f32) -> IVec2 {
        let w = self.field.width().max(1) as i32;
        let h = self.field.height().max(1) as i32;
        let cell = IVec2::new(self.rng.random_range(0..w), self.rng.random_range(0..h));
        stamp(&mut self.field, cell.x, cell.y, strength, self.injector.radius());
        log::debug!("Random ripple at ({}, {})", cell.x, cell.y);
        cell
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.field.snapshot()
    }
}

/// Stamp the startup ripples: centre, plus the two diagonal quarter points
pub fn seed_initial_ripples(sim: &mut Simulation) {
    let w = sim.field.width() as i32;
    let h = sim.field.height() as i32;
    let radius = sim.injector.radius();

    stamp(&mut sim.field, w / 2, h / 2, INITIAL_CENTER_STRENGTH, radius);
    stamp(&mut sim.field, w / 4, h / 4, INITIAL_QUARTER_STRENGTH, radius);
    stamp(&mut sim.field, 3 * w / 4, 3 * h / 4, INITIAL_QUARTER_STRENGTH, radius);

    log::info!("Seeded initial ripples on {}x{} grid", w, h);
}

/// Advance the simulation by one rendered frame
pub fn frame<'a>(sim: &'a mut Simulation, input: &FrameInput, settings: &Settings) -> Snapshot<'a> {
    if input.reset {
        sim.reset();
    }

    let strength = settings.pointer_strength;
    for event in &input.pointer {
        match *event {
            PointerEvent::Down(p) => sim.injector.on_pointer_down(&mut sim.field, p.x, p.y, strength),
            PointerEvent::Move(p) => sim.injector.on_pointer_move(&mut sim.field, p.x, p.y, strength),
            PointerEvent::Up => sim.injector.on_pointer_up(),
        }
    }

    if input.random_ripple {
        sim.random_ripple(settings.random_ripple_strength);
    }

    for _ in 0..settings.effective_substeps() {
        sim.field.step();
    }
    sim.frame_count += 1;

    sim.field.snapshot()
}
