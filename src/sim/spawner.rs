//! Wave populations, the boss, and boss summons

use glam::Vec2;

use super::arena::Rect;
use super::entity::{Enemy, EnemyKind, SPAWN_WEIGHTS};
use super::state::GameState;
use crate::consts::*;

/// Arena side an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

pub const EDGES: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

/// Spawn point centered `SPAWN_MARGIN` pixels outside `edge`
fn edge_spawn_point(state: &mut GameState, edge: Edge) -> Vec2 {
    let (w, h) = (state.arena.width, state.arena.height);
    match edge {
        Edge::Top => Vec2::new(state.rng().uniform(0.0, w), -SPAWN_MARGIN),
        Edge::Bottom => Vec2::new(state.rng().uniform(0.0, w), h + SPAWN_MARGIN),
        Edge::Left => Vec2::new(-SPAWN_MARGIN, state.rng().uniform(0.0, h)),
        Edge::Right => Vec2::new(w + SPAWN_MARGIN, state.rng().uniform(0.0, h)),
    }
}

/// Spawn `count` regular enemies around the arena edges
pub fn spawn_wave(state: &mut GameState, count: u32, now_ms: i64) {
    for _ in 0..count {
        let edge = state.rng().pick(&EDGES).unwrap_or(Edge::Top);
        let kind = state
            .rng()
            .weighted(&SPAWN_WEIGHTS)
            .unwrap_or(EnemyKind::Normal);
        let at = edge_spawn_point(state, edge);
        let id = state.next_entity_id();
        let enemy = Enemy::regular(id, kind, at, now_ms, state.rng());
        state.enemies.push(enemy);
    }
    log::info!("Wave {}: spawned {} enemies", state.run.wave, count);
}

/// Spawn the boss at top center, above the arena
pub fn spawn_boss(state: &mut GameState, now_ms: i64) {
    let rect = Rect::new(
        state.arena.width / 2.0 - BOSS_SIZE / 2.0,
        -BOSS_SPAWN_HEIGHT,
        BOSS_SIZE,
        BOSS_SIZE,
    );
    let id = state.next_entity_id();
    let boss = Enemy::boss(id, rect, state.settings.boss_hp, now_ms);
    state.enemies.push(boss);
    log::info!("Wave {}: boss spawned ({} hp)", state.run.wave, state.settings.boss_hp);
}

/// Let a boss summon 2-4 fast minis once its summon timer is due
///
/// Returns how many minis were spawned.
pub fn boss_try_summon(state: &mut GameState, boss_id: u32, now_ms: i64) -> u32 {
    let Some(boss) = state.enemy(boss_id) else {
        return 0;
    };
    if !boss.is_boss || now_ms < boss.summon_timer {
        return 0;
    }
    let center = boss.center();

    let count = state.rng().inclusive(SUMMON_MIN, SUMMON_MAX);
    for _ in 0..count {
        let offset = Vec2::new(
            state.rng().uniform(-SUMMON_SPREAD, SUMMON_SPREAD),
            state.rng().uniform(-SUMMON_SPREAD, SUMMON_SPREAD),
        );
        let id = state.next_entity_id();
        let mini = Enemy::mini(id, EnemyKind::Fast, center + offset, now_ms, state.rng());
        state.enemies.push(mini);
    }
    if let Some(boss) = state.enemy_mut(boss_id) {
        boss.summon_timer = now_ms + SUMMON_INTERVAL_MS;
    }
    log::debug!("Boss {boss_id} summoned {count} minis");
    count
}
