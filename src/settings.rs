//! Host settings and preferences
//!
//! Gameplay constants are fixed (see [`crate::consts`]); these only change
//! how the host presents the game. Persisted as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_SUBSTEPS;

/// Host settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Suppress sound cues entirely
    pub mute: bool,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Visual Effects ===
    /// Death burst particles
    pub particles: bool,

    // === Accessibility ===
    /// Reduced motion (no bursts)
    pub reduced_motion: bool,

    // === Frame pacing ===
    /// Maximum fixed steps per rendered frame
    pub max_substeps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mute: false,
            sfx_volume: 1.0,
            particles: true,
            reduced_motion: false,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl Settings {
    /// Effective particle bursts (respects reduced_motion)
    pub fn effective_particles(&self) -> bool {
        self.particles && !self.reduced_motion
    }

    /// Whether sound cues should reach the host at all
    pub fn sound_enabled(&self) -> bool {
        !self.mute && self.sfx_volume > 0.0
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        settings.max_substeps = settings.max_substeps.max(1);
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }
}
