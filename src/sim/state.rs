//! Run state and the owning game state
//!
//! The run owns every entity and effect collection exclusively. Entities are
//! addressed by id; removal by id is idempotent.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::effects::Effects;
use super::entity::{Enemy, EnemyProjectile, Player, PlayerProjectile};
use super::rng::GameRng;
use super::upgrade::Ability;
use super::wave::WavePhase;
use crate::color::Color;
use crate::settings::Settings;

/// Progression values of one run (reset by starting a new run)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    /// Current wave (1-based)
    pub wave: u32,
    pub enemies_per_wave: u32,
    pub score: u64,
    pub knockback_level: u32,
    pub pierce_level: u32,
    pub arrow_damage: i32,
    pub player_hp: i32,
    pub abilities: BTreeSet<Ability>,
}

impl RunState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            wave: 1,
            enemies_per_wave: settings.enemies_per_wave_start.max(1),
            score: 0,
            knockback_level: 1,
            pierce_level: 0,
            arrow_damage: settings.arrow_damage,
            player_hp: settings.max_hp,
            abilities: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn owns(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    pub fn is_dead(&self) -> bool {
        self.player_hp <= 0
    }
}

/// Complete state of a run in progress
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub arena: Arena,
    pub run: RunState,
    pub phase: WavePhase,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub arrows: Vec<PlayerProjectile>,
    pub enemy_shots: Vec<EnemyProjectile>,
    /// Visual effects (not gameplay-affecting)
    pub effects: Effects,
    /// Timestamp of the most recent tick
    pub now_ms: i64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Bow and sword select keys as held on the previous tick
    pub select_held: [bool; 2],
    pub(crate) rng: GameRng,
    next_id: u32,
}

impl GameState {
    /// Start a fresh run; the first wave spawns on the first tick
    pub fn new(settings: Settings) -> Self {
        let arena = Arena::new(settings.arena_width, settings.arena_height);
        let player = Player::new(arena.center(), settings.player_size);
        log::info!("New run (seed {})", settings.seed);
        Self {
            rng: GameRng::new(settings.seed),
            run: RunState::new(&settings),
            phase: WavePhase::Preparing,
            arena,
            player,
            enemies: Vec::new(),
            arrows: Vec::new(),
            enemy_shots: Vec::new(),
            effects: Effects::default(),
            now_ms: 0,
            time_ticks: 0,
            select_held: [false; 2],
            next_id: 1,
            settings,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    pub fn enemy_index(&self, id: u32) -> Option<usize> {
        self.enemies.iter().position(|e| e.id == id)
    }

    pub fn enemy(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_mut(&mut self, id: u32) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    /// Remove an enemy without credit; a second removal is a no-op
    pub fn remove_enemy(&mut self, id: u32) -> Option<Enemy> {
        let idx = self.enemy_index(id)?;
        Some(self.enemies.remove(idx))
    }

    /// Remove a dead enemy and credit the score exactly once
    pub fn kill_enemy(&mut self, id: u32) -> bool {
        let Some(enemy) = self.remove_enemy(id) else {
            return false;
        };
        self.run.score += enemy.score_value();
        let center = enemy.center();
        for i in 0..3 {
            let offset = glam::Vec2::new((i as f32 - 1.0) * 6.0, 0.0);
            self.effects.dot(center + offset, enemy.color);
        }
        log::debug!(
            "Enemy {} ({}{}) killed, score {}",
            enemy.id,
            enemy.kind.name(),
            if enemy.is_boss { ", boss" } else { "" },
            self.run.score
        );
        true
    }

    /// Apply damage to the player, keeping HP in `[0, max_hp]`
    ///
    /// Returns true when the player has died.
    pub fn damage_player(&mut self, amount: i32) -> bool {
        self.run.player_hp = (self.run.player_hp - amount).clamp(0, self.settings.max_hp);
        let center = self.player.center();
        self.effects.text(center, format!("-{amount}"), Color::RED);
        log::debug!("Player hit for {amount}, hp {}", self.run.player_hp);
        self.run.is_dead()
    }

    pub fn recenter_player(&mut self) {
        self.player.rect.set_center(self.arena.center());
    }

    /// Abandon every in-flight entity and effect
    pub fn clear_field(&mut self) {
        self.enemies.clear();
        self.arrows.clear();
        self.enemy_shots.clear();
        self.effects.clear();
    }
}
