//! Frame driver settings
//!
//! Persisted as JSON next to the binary. The wave constants themselves
//! (`C_SQUARED`, `DAMPING`) are fixed in `consts` and not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation/driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Wave steps per rendered frame
    pub substeps_per_frame: u32,
    /// Strength of a pointer press (drags use a fraction of it)
    pub pointer_strength: f32,
    /// Strength of the random ripple trigger
    pub random_ripple_strength: f32,
    /// Stamp kernel radius (cells)
    pub stamp_radius: f32,
    /// RNG seed for random ripples (`None` = seed from the clock)
    pub seed: Option<u64>,
    /// Stamp the three startup ripples
    pub initial_ripples: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            substeps_per_frame: SUBSTEPS_PER_FRAME,
            pointer_strength: POINTER_STRENGTH,
            random_ripple_strength: RANDOM_RIPPLE_STRENGTH,
            stamp_radius: STAMP_RADIUS,
            seed: None,
            initial_ripples: true,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const SETTINGS_FILE: &'static str = "ripple_tank_settings.json";

    /// Substeps clamped to `1..=MAX_SUBSTEPS`
    pub fn effective_substeps(&self) -> u32 {
        self.substeps_per_frame.clamp(1, MAX_SUBSTEPS)
    }

    /// Stamp radius clamped to `1..=MAX_STAMP_RADIUS` (default if non-finite)
    pub fn effective_stamp_radius(&self) -> f32 {
        if self.stamp_radius.is_finite() {
            self.stamp_radius.clamp(1.0, MAX_STAMP_RADIUS)
        } else {
            STAMP_RADIUS
        }
    }

    /// Load settings from the default file
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::SETTINGS_FILE))
    }

    /// Save settings to the default file
    pub fn save(&self) {
        self.save_to(Path::new(Self::SETTINGS_FILE));
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Failed to save settings to {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let s = Settings::default();
        assert_eq!(s.substeps_per_frame, 3);
        assert!((s.pointer_strength - 0.8).abs() < 1e-6);
        assert!((s.random_ripple_strength - 2.0).abs() < 1e-6);
        assert!((s.stamp_radius - 8.0).abs() < 1e-6);
        assert!(s.initial_ripples);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let s: Settings = serde_json::from_str(r#"{ "substeps_per_frame": 5 }"#).unwrap();
        assert_eq!(s.substeps_per_frame, 5);
        assert!((s.stamp_radius - STAMP_RADIUS).abs() < 1e-6);

        let empty: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn test_effective_values_are_clamped() {
        let mut s = Settings::default();
        s.substeps_per_frame = 0;
        assert_eq!(s.effective_substeps(), 1);
        s.substeps_per_frame = 1000;
        assert_eq!(s.effective_substeps(), MAX_SUBSTEPS);

        s.stamp_radius = 0.1;
        assert_eq!(s.effective_stamp_radius(), 1.0);
        s.stamp_radius = 1e6;
        assert_eq!(s.effective_stamp_radius(), MAX_STAMP_RADIUS);
        s.stamp_radius = f32::NAN;
        assert_eq!(s.effective_stamp_radius(), STAMP_RADIUS);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("ripple_tank_settings_{}.json", std::process::id()));
        let s = Settings {
            substeps_per_frame: 4,
            seed: Some(42),
            initial_ripples: false,
            ..Default::default()
        };
        s.save_to(&path);
        let loaded = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, s);
    }

    #[test]
    fn test_load_missing_or_corrupt_falls_back() {
        let missing = std::env::temp_dir().join("ripple_tank_does_not_exist.json");
        assert_eq!(Settings::load_from(&missing), Settings::default());

        let corrupt = std::env::temp_dir().join(format!("ripple_tank_corrupt_{}.json", std::process::id()));
        std::fs::write(&corrupt, "{ not json").unwrap();
        let loaded = Settings::load_from(&corrupt);
        let _ = std::fs::remove_file(&corrupt);
        assert_eq!(loaded, Settings::default());
    }
}
