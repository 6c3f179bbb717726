//! Game settings
//!
//! Loaded once at startup from an optional JSON file. Unknown fields are
//! rejected, missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    // === Palette (#RRGGBB) ===
    pub player_color: String,
    pub enemy_color: String,
    pub message_color: String,

    // === Effects ===
    /// Particle bursts on kills and hits
    pub particles: bool,
    /// Hard cap on live particles
    pub max_particles: usize,

    // === Simulation ===
    /// RNG seed; a fixed seed replays identically given identical input
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_color: PLAYER_COLOR_HEX.to_string(),
            enemy_color: ENEMY_COLOR_HEX.to_string(),
            message_color: MESSAGE_COLOR_HEX.to_string(),

            particles: true,
            max_particles: 2000,

            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from disk, falling back to defaults when the file is missing
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Effective particle cap (0 when effects are off)
    pub fn max_particles(&self) -> usize {
        if !self.particles { 0 } else { self.max_particles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r##"{ "enemy_color": "#00ff00", "seed": 7 }"##).unwrap();
        assert_eq!(s.enemy_color, "#00ff00");
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.player_color, PLAYER_COLOR_HEX);
        assert!(s.particles);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Settings::from_json(r#"{ "lives": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings { seed: Some(42), particles: false, ..Default::default() };
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
        assert_eq!(back.max_particles(), 0);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("swarm-survivor-no-such-settings.json");
        let s = Settings::load(&path).unwrap();
        assert_eq!(s, Settings::default());
    }
}
