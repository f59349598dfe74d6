//! Run settings
//!
//! Every tunable constant of a run. `Settings::default()` is the stock game;
//! a JSON file may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Tunable constants for a run (reset on every new run)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the run RNG
    pub seed: u64,

    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    pub player_size: f32,
    /// Pixels per tick per held direction
    pub player_speed: f32,
    pub max_hp: i32,

    // === Bow ===
    pub arrow_speed: f32,
    pub arrow_damage: i32,

    // === Sword ===
    pub sword_damage: i32,
    pub sword_cooldown_ms: i64,
    pub sword_range: f32,
    /// Half-width of the swing in degrees
    pub sword_arc_half_deg: f32,
    pub base_knockback: f32,

    // === Waves ===
    pub enemies_per_wave_start: u32,
    pub boss_hp: i32,
    pub archer_shot_damage: i32,

    // === Upgrade caps ===
    pub pierce_max_level: u32,
    pub knockback_max_level: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,

            arena_width: 1280.0,
            arena_height: 720.0,

            player_size: 40.0,
            player_speed: 5.0,
            max_hp: 100,

            arrow_speed: 18.0,
            arrow_damage: 20,

            sword_damage: 40,
            sword_cooldown_ms: 300,
            sword_range: 120.0,
            sword_arc_half_deg: 45.0,
            base_knockback: 6.0,

            enemies_per_wave_start: 5,
            boss_hp: 2000,
            archer_shot_damage: 10,

            pierce_max_level: 3,
            knockback_max_level: 5,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from an optional path, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|err| {
                log::warn!("{err}; using default settings");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Same seed, everything else stock
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Sword half angle in radians
    pub fn sword_arc_half(&self) -> f32 {
        self.sword_arc_half_deg.to_radians()
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.player_size <= 0.0 {
            return Err(SettingsError::Invalid("player_size must be positive".into()));
        }
        if self.max_hp <= 0 {
            return Err(SettingsError::Invalid("max_hp must be positive".into()));
        }
        if self.arena_width <= self.player_size || self.arena_height <= self.player_size {
            return Err(SettingsError::Invalid(
                "arena must be larger than the player".into(),
            ));
        }
        if self.enemies_per_wave_start == 0 {
            return Err(SettingsError::Invalid(
                "enemies_per_wave_start must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
