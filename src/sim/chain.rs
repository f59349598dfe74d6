//! Chain lightning: half damage to the nearest neighbors of a struck enemy

use super::state::GameState;
use crate::color::Color;
use crate::consts::{CHAIN_MAX_TARGETS, CHAIN_RADIUS, LIGHTNING_TTL_MS};

/// Arc from `primary_id` to at most two living neighbors within range
///
/// Secondaries take `base_damage / 2`. Arcs do not propagate further.
/// Returns the ids that were struck.
pub fn chain_lightning(state: &mut GameState, primary_id: u32, base_damage: i32) -> Vec<u32> {
    let Some(primary) = state.enemy(primary_id) else {
        return Vec::new();
    };
    let origin = primary.center();

    let mut candidates: Vec<(f32, u32)> = state
        .enemies
        .iter()
        .filter(|e| e.id != primary_id && e.hp > 0)
        .map(|e| (e.center().distance(origin), e.id))
        .filter(|(dist, _)| *dist <= CHAIN_RADIUS)
        .collect();
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
    candidates.truncate(CHAIN_MAX_TARGETS);

    let damage = base_damage / 2;
    let mut struck = Vec::with_capacity(candidates.len());
    for (_, id) in candidates {
        let Some(target) = state.enemy_mut(id) else {
            continue;
        };
        target.hp -= damage;
        let to = target.center();
        let dead = target.hp <= 0;

        state.effects.text(to, format!("-{damage}"), Color::YELLOW);
        state.effects.bolt(origin, to, LIGHTNING_TTL_MS);
        struck.push(id);

        if dead {
            state.kill_enemy(id);
        }
    }
    struck
}
