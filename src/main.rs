//! Ripple Tank entry point
//!
//! Runs a headless session: a scripted host feeds mouse and key state through
//! the platform glue, the simulation advances once per frame, and each
//! snapshot is staged for texture upload. Field statistics are logged as the
//! session runs.
//!
//! Usage: `ripple-tank [frames] [settings.json]`

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::{UVec2, Vec2};

use ripple_tank::Settings;
use ripple_tank::platform::{KeyLatch, PointerTracker};
use ripple_tank::renderer::{HeightStaging, RenderSink};
use ripple_tank::sim::{FrameInput, Simulation, frame, seed_initial_ripples};

const DEFAULT_FRAMES: u64 = 600;
const WINDOW_SIZE: f32 = 1024.0;
const STATS_INTERVAL: u64 = 60;

/// Raw host state for one frame, as a windowing layer would report it
#[derive(Debug, Clone, Copy, Default)]
struct HostState {
    cursor: Vec2,
    mouse_down: bool,
    reset_key: bool,
    ripple_key: bool,
}

/// Scripted stand-in for a user: a circular drag, a held space bar, a reset
fn scripted_host(frame_index: u64) -> HostState {
    let t = frame_index as f32 / 60.0;
    let center = Vec2::splat(WINDOW_SIZE / 2.0);
    let orbit = Vec2::new(t.cos(), t.sin()) * (WINDOW_SIZE * 0.3);

    HostState {
        cursor: center + orbit,
        mouse_down: (60..180).contains(&(frame_index % 400)),
        ripple_key: (240..250).contains(&(frame_index % 400)),
        reset_key: frame_index % 400 == 390,
    }
}

/// Session state: simulation plus the host glue feeding it
struct Session {
    sim: Simulation,
    settings: Settings,
    staging: HeightStaging,
    pointer: PointerTracker,
    reset_latch: KeyLatch,
    ripple_latch: KeyLatch,
}

impl Session {
    fn new(settings: Settings, seed: u64) -> Self {
        let mut sim = Simulation::new(&settings, seed);
        if settings.initial_ripples {
            seed_initial_ripples(&mut sim);
        }
        let grid = UVec2::new(sim.field.width() as u32, sim.field.height() as u32);
        let pointer = PointerTracker::new(grid, Vec2::splat(WINDOW_SIZE));

        Self {
            sim,
            settings,
            staging: HeightStaging::new(),
            pointer,
            reset_latch: KeyLatch::default(),
            ripple_latch: KeyLatch::default(),
        }
    }

    /// Translate host state into frame input
    fn collect_input(&mut self, host: HostState) -> FrameInput {
        let mut input = FrameInput {
            reset: self.reset_latch.update(host.reset_key),
            random_ripple: self.ripple_latch.update(host.ripple_key),
            ..Default::default()
        };

        // Cursor first so a press lands where the pointer is
        input.pointer.extend(self.pointer.cursor(host.cursor));
        input.pointer.extend(self.pointer.button(host.mouse_down));
        input
    }

    fn run_frame(&mut self, host: HostState) {
        let input = self.collect_input(host);
        let snapshot = frame(&mut self.sim, &input, &self.settings);
        self.staging.present(snapshot);

        let n = self.sim.frame_count;
        if n % STATS_INTERVAL == 0 {
            let stats = self.staging.stats();
            log::info!(
                "frame {:>5}: min={:+.4} max={:+.4} |h|max={:.4} energy={:.3}",
                n,
                stats.min,
                stats.max,
                stats.max_abs,
                stats.energy
            );
        }
        if !self.staging.stats().max_abs.is_finite() {
            log::error!("Field diverged at frame {}", n);
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Ripple Tank (headless) starting...");

    let mut args = std::env::args().skip(1);
    let frames = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Invalid frame count {:?}, using {}", arg, DEFAULT_FRAMES);
            DEFAULT_FRAMES
        }),
        None => DEFAULT_FRAMES,
    };
    let settings = match args.next() {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::load(),
    };

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Simulation initialized with seed: {}", seed);

    let mut session = Session::new(settings, seed);
    for i in 0..frames {
        session.run_frame(scripted_host(i));
    }

    let stats = session.staging.stats();
    log::info!(
        "Finished {} frames ({} steps since last reset), |h|max={:.4}, staged {} bytes",
        session.sim.frame_count,
        session.sim.field.steps(),
        stats.max_abs,
        session.staging.bytes().len()
    );
}
