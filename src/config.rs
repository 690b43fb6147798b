//! Engine configuration.
//!
//! Loads settings from a JSON file when present, otherwise defaults.
//! Every field falls back individually, so a partial file is fine. The
//! config is passed by value into each `Engine` rather than held in a
//! process-global, so separate engine instances can run with different
//! settings.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tunable engine parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Milliseconds between automatic capture ticks.
    pub capture_interval_ms: u64,
    /// Minimum milliseconds between two emitted tips.
    pub tip_cooldown_ms: u64,
    /// Integer magnification applied to HUD crops before recognition.
    pub upscale_factor: u32,
    /// Contrast stretch gain applied after grayscale conversion.
    pub contrast_gain: f32,
    /// Fraction of frame width kept by each HUD crop.
    pub keep_width: f64,
    /// Fraction of frame height kept by each HUD crop.
    pub keep_height: f64,
    /// Upper bound for plausible health readings.
    pub max_health: u32,
    /// Health at or below this counts as low.
    pub low_health: u32,
    /// Health at or below this counts as critical. Keep at or below
    /// `low_health` so critical implies low.
    pub critical_health: u32,
    /// Recognized text shorter than this is treated as noise.
    pub min_text_len: usize,
    /// Frames narrower or shorter than this skip the run.
    pub min_frame_dim: u32,
    /// Overrides the per-profile general-tip probability when set.
    pub general_tip_chance: Option<f64>,
    /// Milliseconds after the last keystroke before the settings lookup
    /// for an unknown game fires.
    pub lookup_debounce_ms: u64,
    /// Base URL of the game settings lookup service.
    pub settings_base_url: String,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            capture_interval_ms: 2000,
            tip_cooldown_ms: 3500,
            upscale_factor: 3,
            contrast_gain: 1.6,
            keep_width: 0.50,
            keep_height: 0.45,
            max_health: 300,
            low_health: 50,
            critical_health: 25,
            min_text_len: 3,
            min_frame_dim: 32,
            general_tip_chance: None,
            lookup_debounce_ms: 500,
            settings_base_url: String::new(),
        }
    }
}

/// Loads configuration from a JSON file, or returns defaults when the
/// file is missing or malformed.
pub fn load_config(path: &Path) -> CoachConfig {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    crate::log(&format!("Config loaded from {}", path.display()));
                    return config;
                }
                Err(e) => {
                    crate::log(&format!(
                        "Failed to parse {}: {}. Using defaults.",
                        path.display(),
                        e
                    ));
                }
            },
            Err(e) => {
                crate::log(&format!(
                    "Failed to read {}: {}. Using defaults.",
                    path.display(),
                    e
                ));
            }
        }
    } else {
        crate::log(&format!(
            "{} not found. Using default config.",
            path.display()
        ));
    }

    CoachConfig::default()
}
