//! Wave Arena - A top-down wave survival arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, weapons, waves, upgrades)
//! - `present`: Projection of the simulation onto a drawing collaborator
//! - `settings`: Tunable run constants
//! - `input`: Key set to per-tick intent mapping
//! - `autopilot`: Scripted player for headless runs

pub mod autopilot;
pub mod color;
pub mod input;
pub mod present;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Logical simulation rate
    pub const SIM_HZ: u32 = 60;
    /// Wall-clock milliseconds per logical tick
    pub const FRAME_MS: i64 = 1000 / SIM_HZ as i64;

    /// Status effects (burn / poison)
    pub const STATUS_INTERVAL_MS: i64 = 1000;
    pub const STATUS_DAMAGE: i32 = 5;
    pub const ELEMENT_DURATION_MS: i64 = 3000;

    /// Chain lightning
    pub const CHAIN_RADIUS: f32 = 100.0;
    pub const CHAIN_MAX_TARGETS: usize = 2;
    pub const LIGHTNING_TTL_MS: i64 = 350;

    /// Score credit per kill
    pub const KILL_SCORE: u64 = 1;
    pub const BOSS_KILL_SCORE: u64 = 25;

    /// Regular enemy footprint and spawn placement
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const SPAWN_MARGIN: f32 = 40.0;

    /// Boss
    pub const BOSS_SIZE: f32 = 120.0;
    pub const BOSS_SPAWN_HEIGHT: f32 = 140.0;
    pub const BOSS_SPEED: f32 = 1.0;
    pub const BOSS_CONTACT_DAMAGE: i32 = 60;
    pub const BOSS_WAVE_INTERVAL: u32 = 10;
    pub const SUMMON_INTERVAL_MS: i64 = 5000;
    pub const SUMMON_SPREAD: f32 = 80.0;
    pub const SUMMON_MIN: u32 = 2;
    pub const SUMMON_MAX: u32 = 4;

    /// Archer shots
    pub const ARCHER_SHOT_SIZE: f32 = 8.0;
    pub const ARCHER_SHOT_SPEED: f32 = 8.0;
    pub const ARCHER_BASE_INTERVAL_MS: i64 = 1800;
    pub const ARCHER_INTERVAL_JITTER_MS: i64 = 400;

    /// Player arrows
    pub const ARROW_SIZE: f32 = 10.0;
    /// Spawn nudge along the aim vector so the arrow starts clear of the player
    pub const ARROW_SPAWN_NUDGE: f32 = 0.18;

    /// Melee arc tolerance multiplier applied to the half angle
    pub const SWORD_ARC_TOLERANCE: f32 = 1.05;
    /// How long a swing stays visible
    pub const SWORD_SWING_VISIBLE_MS: i64 = 150;

    /// Wave progression
    pub const WAVE_GROWTH: f64 = 1.1;
    pub const COUNTDOWN_SECONDS: u32 = 5;
    pub const COUNTDOWN_STEP_MS: i64 = 1000;

    /// Upgrade effects
    pub const HEAL_AMOUNT: i32 = 20;
    pub const DAMAGE_BONUS: i32 = 10;
    pub const UPGRADE_CHOICES: usize = 2;
}

/// Wrap an angle into (-π, π]
#[inline]
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}
