//! Game settings and preferences
//!
//! Stored as JSON. Missing fields take their defaults, so an old or partial
//! file still loads.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::FRAME_INTERVAL_MS;
use crate::platform::DEFAULT_AXIS_THRESHOLD;

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Show FPS and entity count
    pub show_fps: bool,
    /// Show the controller state line
    pub show_input: bool,

    // === Timing ===
    /// Nominal frame interval in milliseconds
    pub frame_interval_ms: u64,

    // === Input ===
    /// Stick deflection needed to register a direction (0.0 - 1.0)
    pub axis_threshold: f32,

    // === Headless demo ===
    /// Seed for the scripted pilot
    pub demo_seed: u64,
    /// Frames to run before exiting
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: true,
            show_input: true,

            frame_interval_ms: FRAME_INTERVAL_MS,

            axis_threshold: DEFAULT_AXIS_THRESHOLD,

            demo_seed: 0x5eed,
            demo_frames: 300,
        }
    }
}

impl Settings {
    /// Frame interval as a `Duration`
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_interval_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "frame_interval_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(0.0..1.0).contains(&self.axis_threshold) {
            return Err(SettingsError::Invalid {
                field: "axis_threshold",
                reason: format!("{} is outside [0, 1)", self.axis_threshold),
            });
        }
        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
