//! Entity data: player, enemies, projectiles
//!
//! Archetypes are tags with a stat table; the boss and summoned minis are
//! flags on `Enemy`, not separate types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Rect;
use super::rng::GameRng;
use crate::color::Color;
use crate::consts::*;

/// Selected player weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Weapon {
    #[default]
    Bow,
    Sword,
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub weapon: Weapon,
    /// Timestamp of the last valid melee swing
    pub last_swing_ms: Option<i64>,
    /// Aim point at the time of the last swing (for drawing)
    pub last_swing_aim: Vec2,
}

impl Player {
    pub fn new(center: Vec2, size: f32) -> Self {
        Self {
            rect: Rect::from_center(center, size, size),
            weapon: Weapon::Bow,
            last_swing_ms: None,
            last_swing_aim: center,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}

/// Enemy stat template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Normal,
    Fast,
    Tank,
    Archer,
}

/// Base stats for one archetype
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeStats {
    pub hp: i32,
    pub speed: f32,
    pub damage: i32,
    pub color: Color,
}

/// Relative spawn weights for regular waves
pub const SPAWN_WEIGHTS: [(EnemyKind, u32); 4] = [
    (EnemyKind::Normal, 50),
    (EnemyKind::Fast, 30),
    (EnemyKind::Tank, 10),
    (EnemyKind::Archer, 10),
];

impl EnemyKind {
    pub fn stats(self) -> ArchetypeStats {
        match self {
            EnemyKind::Normal => ArchetypeStats {
                hp: 20,
                speed: 2.0,
                damage: 10,
                color: Color::RED,
            },
            EnemyKind::Fast => ArchetypeStats {
                hp: 15,
                speed: 3.0,
                damage: 8,
                color: Color::YELLOW,
            },
            EnemyKind::Tank => ArchetypeStats {
                hp: 40,
                speed: 1.0,
                damage: 15,
                color: Color::DARK_RED,
            },
            EnemyKind::Archer => ArchetypeStats {
                hp: 18,
                speed: 2.0,
                damage: 8,
                color: Color::CYAN,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Normal => "normal",
            EnemyKind::Fast => "fast",
            EnemyKind::Tank => "tank",
            EnemyKind::Archer => "archer",
        }
    }
}

/// A hostile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub rect: Rect,
    pub kind: EnemyKind,
    pub is_boss: bool,
    pub is_mini: bool,
    pub hp: i32,
    pub max_hp: i32,
    /// Pixels per tick
    pub speed: f32,
    /// Contact damage
    pub damage: i32,
    pub color: Color,
    pub burn_ms_left: i64,
    pub poison_ms_left: i64,
    pub last_status_tick: i64,
    /// Archer: timestamp of the last shot
    pub shoot_timer: i64,
    /// Archer: delay between shots
    pub shoot_interval: i64,
    /// Boss: timestamp of the next summon
    pub summon_timer: i64,
}

impl Enemy {
    fn from_stats(id: u32, kind: EnemyKind, rect: Rect, now_ms: i64) -> Self {
        let stats = kind.stats();
        Self {
            id,
            rect,
            kind,
            is_boss: false,
            is_mini: false,
            hp: stats.hp,
            max_hp: stats.hp,
            speed: stats.speed,
            damage: stats.damage,
            color: stats.color,
            burn_ms_left: 0,
            poison_ms_left: 0,
            last_status_tick: now_ms,
            shoot_timer: now_ms,
            shoot_interval: ARCHER_BASE_INTERVAL_MS,
            summon_timer: 0,
        }
    }

    /// A regular wave enemy (double base HP)
    pub fn regular(id: u32, kind: EnemyKind, center: Vec2, now_ms: i64, rng: &mut GameRng) -> Self {
        let rect = Rect::from_center(center, ENEMY_SIZE, ENEMY_SIZE);
        let mut enemy = Self::from_stats(id, kind, rect, now_ms);
        enemy.hp *= 2;
        enemy.max_hp = enemy.hp;
        if kind == EnemyKind::Archer {
            enemy.shoot_interval =
                ARCHER_BASE_INTERVAL_MS + rng.below(0, ARCHER_INTERVAL_JITTER_MS);
        }
        enemy
    }

    /// A boss-summoned minion: base HP, double speed, always yellow
    pub fn mini(id: u32, kind: EnemyKind, center: Vec2, now_ms: i64, rng: &mut GameRng) -> Self {
        let rect = Rect::from_center(center, ENEMY_SIZE, ENEMY_SIZE);
        let mut enemy = Self::from_stats(id, kind, rect, now_ms);
        enemy.is_mini = true;
        enemy.speed *= 2.0;
        enemy.color = Color::YELLOW;
        if kind == EnemyKind::Archer {
            enemy.shoot_interval =
                ARCHER_BASE_INTERVAL_MS + rng.below(0, ARCHER_INTERVAL_JITTER_MS);
        }
        enemy
    }

    /// The tank-derived boss; first summon 5 s after creation
    pub fn boss(id: u32, rect: Rect, hp: i32, now_ms: i64) -> Self {
        let mut enemy = Self::from_stats(id, EnemyKind::Tank, rect, now_ms);
        enemy.is_boss = true;
        enemy.hp = hp;
        enemy.max_hp = hp;
        enemy.speed = BOSS_SPEED;
        enemy.damage = BOSS_CONTACT_DAMAGE;
        enemy.color = Color::BOSS;
        enemy.summon_timer = now_ms + SUMMON_INTERVAL_MS;
        enemy
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn is_poisoned(&self) -> bool {
        self.poison_ms_left > 0
    }

    pub fn is_burning(&self) -> bool {
        self.burn_ms_left > 0
    }

    /// Points credited when this enemy dies
    pub fn score_value(&self) -> u64 {
        if self.is_boss {
            BOSS_KILL_SCORE
        } else {
            KILL_SCORE
        }
    }
}

/// A player arrow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProjectile {
    pub rect: Rect,
    pub vel: Vec2,
    /// Facing angle in radians (drawing only)
    pub angle: f32,
    pub pierce_remaining: u32,
    /// Enemies this arrow has already struck
    pub struck: Vec<u32>,
}

impl PlayerProjectile {
    /// Arrow leaving `origin` toward `target`
    pub fn aimed(origin: Vec2, target: Vec2, speed: f32, pierce: u32) -> Self {
        let dir = unit_toward(origin, target);
        let start = origin + dir * ARROW_SPAWN_NUDGE;
        Self {
            rect: Rect::from_center(start, ARROW_SIZE, ARROW_SIZE),
            vel: dir * speed,
            angle: dir.y.atan2(dir.x),
            pierce_remaining: pierce,
            struck: Vec::new(),
        }
    }

    pub fn advance(&mut self) {
        self.rect.translate(self.vel);
    }

    pub fn has_struck(&self, enemy_id: u32) -> bool {
        self.struck.contains(&enemy_id)
    }
}

/// An archer shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyProjectile {
    pub rect: Rect,
    pub vel: Vec2,
    pub damage: i32,
}

impl EnemyProjectile {
    pub fn aimed(origin: Vec2, target: Vec2, damage: i32) -> Self {
        let dir = unit_toward(origin, target);
        Self {
            rect: Rect::from_center(origin, ARCHER_SHOT_SIZE, ARCHER_SHOT_SIZE),
            vel: dir * ARCHER_SHOT_SPEED,
            damage,
        }
    }

    pub fn advance(&mut self) {
        self.rect.translate(self.vel);
    }
}

/// Unit vector from `from` to `to`; zero distance divides by 1 and yields zero
pub fn unit_toward(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist == 0.0 { delta } else { delta / dist }
}
