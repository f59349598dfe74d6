//! Burn and poison damage over time

use super::state::GameState;
use crate::color::Color;
use crate::consts::{ELEMENT_DURATION_MS, STATUS_DAMAGE, STATUS_INTERVAL_MS};

/// Start (or refresh) a burn, primed so the first tick fires immediately
pub fn ignite(state: &mut GameState, enemy_id: u32, now_ms: i64) {
    if let Some(enemy) = state.enemy_mut(enemy_id) {
        enemy.burn_ms_left = ELEMENT_DURATION_MS;
        enemy.last_status_tick = now_ms - STATUS_INTERVAL_MS;
    }
}

/// Start (or refresh) a poison, primed like `ignite`
pub fn poison(state: &mut GameState, enemy_id: u32, now_ms: i64) {
    if let Some(enemy) = state.enemy_mut(enemy_id) {
        enemy.poison_ms_left = ELEMENT_DURATION_MS;
        enemy.last_status_tick = now_ms - STATUS_INTERVAL_MS;
    }
}

/// Apply at most one status tick to an enemy
///
/// Does not remove the enemy; the caller checks HP afterwards.
pub fn tick_status(state: &mut GameState, enemy_id: u32, now_ms: i64) {
    let Some(enemy) = state.enemy_mut(enemy_id) else {
        return;
    };

    if !enemy.is_burning() && !enemy.is_poisoned() {
        // Idle enemies follow the clock so a later application waits a full interval
        enemy.last_status_tick = now_ms;
        return;
    }
    if now_ms - enemy.last_status_tick < STATUS_INTERVAL_MS {
        return;
    }
    enemy.last_status_tick = now_ms;

    let center = enemy.center();
    let mut procs = Vec::with_capacity(2);
    if enemy.is_burning() {
        enemy.hp -= STATUS_DAMAGE;
        enemy.burn_ms_left = (enemy.burn_ms_left - STATUS_INTERVAL_MS).max(0);
        procs.push(Color::ORANGE);
    }
    if enemy.is_poisoned() {
        enemy.hp -= STATUS_DAMAGE;
        enemy.poison_ms_left = (enemy.poison_ms_left - STATUS_INTERVAL_MS).max(0);
        procs.push(Color::PURPLE);
    }

    for (i, color) in procs.into_iter().enumerate() {
        let pos = center + glam::Vec2::new(0.0, -12.0 * i as f32);
        state.effects.text(pos, format!("-{STATUS_DAMAGE}"), color);
        state.effects.dot(pos, color);
    }
}
