//! Weapon resolution: bow shots, sword sweeps, and elemental riders

use glam::Vec2;

use super::chain::chain_lightning;
use super::entity::{PlayerProjectile, unit_toward};
use super::state::GameState;
use super::status;
use super::upgrade::Ability;
use crate::color::Color;
use crate::consts::{LIGHTNING_TTL_MS, SWORD_ARC_TOLERANCE};
use crate::wrap_angle;

/// Loose an arrow from the player's center toward `aim`
pub fn fire_arrow(state: &mut GameState, aim: Vec2) {
    let arrow = PlayerProjectile::aimed(
        state.player.center(),
        aim,
        state.settings.arrow_speed,
        state.run.pierce_level,
    );
    state.arrows.push(arrow);
}

/// Swing the sword toward `aim`
///
/// Returns `None` while the swing is on cooldown, otherwise the ids of every
/// enemy inside the arc (some may have died during the sweep).
pub fn try_swing(state: &mut GameState, aim: Vec2, now_ms: i64) -> Option<Vec<u32>> {
    let cooldown = state.settings.sword_cooldown_ms;
    if state
        .player
        .last_swing_ms
        .is_some_and(|last| now_ms - last < cooldown)
    {
        return None;
    }
    state.player.last_swing_ms = Some(now_ms);
    state.player.last_swing_aim = aim;

    let origin = state.player.center();
    let aim_dir = aim - origin;
    let aim_angle = aim_dir.y.atan2(aim_dir.x);
    let half_arc = state.settings.sword_arc_half() * SWORD_ARC_TOLERANCE;
    let reach = state.settings.sword_range;

    let targets: Vec<u32> = state
        .enemies
        .iter()
        .filter(|e| in_sweep(origin, aim_angle, e.center(), reach, half_arc))
        .map(|e| e.id)
        .collect();

    let push = state.settings.base_knockback * state.run.knockback_level as f32;
    let damage = state.settings.sword_damage;
    for &id in &targets {
        // An earlier chain may already have removed this target
        let Some(enemy) = state.enemy_mut(id) else {
            continue;
        };
        let outward = unit_toward(origin, enemy.center());
        enemy.rect.translate(outward * push);
        strike(state, id, damage, now_ms);
    }

    log::trace!("Sword swing hit {} enemies", targets.len());
    Some(targets)
}

/// Whether `target` lies within `reach` and inside the swing arc
pub fn in_sweep(origin: Vec2, aim_angle: f32, target: Vec2, reach: f32, half_arc: f32) -> bool {
    let delta = target - origin;
    if delta.length() > reach {
        return false;
    }
    let angle = delta.y.atan2(delta.x);
    wrap_angle(angle - aim_angle).abs() <= half_arc
}

/// Damage one enemy and apply every owned rider
///
/// Returns true when the hit killed the enemy (score is credited here).
pub fn strike(state: &mut GameState, enemy_id: u32, damage: i32, now_ms: i64) -> bool {
    let Some(enemy) = state.enemy_mut(enemy_id) else {
        return false;
    };
    enemy.hp -= damage;
    let center = enemy.center();
    state
        .effects
        .fading_text(center, format!("-{damage}"), Color::WHITE);

    if state.run.owns(Ability::Flame) {
        status::ignite(state, enemy_id, now_ms);
    }
    if state.run.owns(Ability::Poison) {
        status::poison(state, enemy_id, now_ms);
    }
    if state.run.owns(Ability::Lightning) {
        state.effects.bolt(center, center, LIGHTNING_TTL_MS);
        chain_lightning(state, enemy_id, damage);
    }

    if state.enemy(enemy_id).is_some_and(|e| e.hp <= 0) {
        state.kill_enemy(enemy_id)
    } else {
        false
    }
}

/// Resolve arrow/enemy overlaps for this tick
///
/// Each arrow strikes at most one enemy per tick and never the same enemy
/// twice. A hit spends one pierce; a hit with no pierce left destroys it.
pub fn resolve_arrow_hits(state: &mut GameState, now_ms: i64) {
    let damage = state.run.arrow_damage;
    let mut spent = Vec::new();

    for i in 0..state.arrows.len() {
        let arrow = &state.arrows[i];
        let target = state
            .enemies
            .iter()
            .find(|e| !arrow.has_struck(e.id) && e.rect.intersects(&arrow.rect))
            .map(|e| e.id);
        let Some(enemy_id) = target else {
            continue;
        };

        state.arrows[i].struck.push(enemy_id);
        strike(state, enemy_id, damage, now_ms);

        let arrow = &mut state.arrows[i];
        if arrow.pierce_remaining > 0 {
            arrow.pierce_remaining -= 1;
        } else {
            spent.push(i);
        }
    }

    for i in spent.into_iter().rev() {
        state.arrows.remove(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::entity::{Enemy, EnemyKind};

    fn spawn(state: &mut GameState, kind: EnemyKind, at: Vec2) -> u32 {
        let id = state.next_entity_id();
        let enemy = Enemy::regular(id, kind, at, 0, state.rng());
        state.enemies.push(enemy);
        id
    }

    /// Advance arrows and resolve hits without any other subsystem
    fn fly(state: &mut GameState, ticks: usize) {
        for t in 0..ticks {
            for arrow in &mut state.arrows {
                arrow.advance();
            }
            resolve_arrow_hits(state, 10_000 + t as i64 * 16);
        }
    }

    #[test]
    fn test_bow_kill_in_two_shots() {
        let mut state = GameState::new(Settings::default());
        let player = state.player.center();
        let target = player + Vec2::new(200.0, 0.0);
        let id = spawn(&mut state, EnemyKind::Normal, target);

        fire_arrow(&mut state, target);
        fly(&mut state, 20);
        assert_eq!(state.enemy(id).unwrap().hp, 20);
        assert!(state.arrows.is_empty());

        fire_arrow(&mut state, target);
        fly(&mut state, 20);
        assert!(state.enemy(id).is_none());
        assert_eq!(state.run.score, 1);
    }

    #[test]
    fn test_pierce_cap() {
        let mut state = GameState::new(Settings::default());
        state.run.pierce_level = 2;
        let player = state.player.center();
        let ids: Vec<u32> = (1..=3)
            .map(|i| spawn(&mut state, EnemyKind::Normal, player + Vec2::new(100.0 * i as f32, 0.0)))
            .collect();
        let behind = spawn(&mut state, EnemyKind::Normal, player + Vec2::new(400.0, 0.0));

        fire_arrow(&mut state, player + Vec2::new(500.0, 0.0));
        fly(&mut state, 30);

        for id in ids {
            assert_eq!(state.enemy(id).unwrap().hp, 20);
        }
        assert_eq!(state.enemy(behind).unwrap().hp, 40);
        assert!(state.arrows.is_empty());
    }

    #[test]
    fn test_arrow_hits_enemy_once_while_overlapping() {
        let mut state = GameState::new(Settings::default());
        state.run.pierce_level = 3;
        let player = state.player.center();
        let id = spawn(&mut state, EnemyKind::Tank, player + Vec2::new(100.0, 0.0));
        fire_arrow(&mut state, player + Vec2::new(200.0, 0.0));
        fly(&mut state, 12);
        assert_eq!(state.enemy(id).unwrap().hp, 60);
        assert_eq!(state.arrows.len(), 1);
        assert_eq!(state.arrows[0].pierce_remaining, 2);
    }

    #[test]
    fn test_sweep_arc_edges() {
        let mut state = GameState::new(Settings::default());
        let origin = state.player.center();
        let aim = origin + Vec2::new(100.0, 0.0);
        let at = |deg: f32, dist: f32| {
            let r = deg.to_radians();
            origin + Vec2::new(r.cos(), r.sin()) * dist
        };
        let inside = spawn(&mut state, EnemyKind::Tank, at(46.0, 100.0));
        let outside = spawn(&mut state, EnemyKind::Tank, at(-48.0, 100.0));
        let too_far = spawn(&mut state, EnemyKind::Tank, at(180.0 - 140.0, 121.0));

        let hits = try_swing(&mut state, aim, 5_000).unwrap();
        assert_eq!(hits, vec![inside]);
        assert_eq!(state.enemy(inside).unwrap().hp, 40);
        assert_eq!(state.enemy(outside).unwrap().hp, 80);
        assert_eq!(state.enemy(too_far).unwrap().hp, 80);
    }

    #[test]
    fn test_sweep_knockback_scales_with_level() {
        let mut state = GameState::new(Settings::default());
        state.run.knockback_level = 3;
        let origin = state.player.center();
        let id = spawn(&mut state, EnemyKind::Tank, origin + Vec2::new(50.0, 0.0));
        try_swing(&mut state, origin + Vec2::new(10.0, 0.0), 1_000).unwrap();
        let moved = state.enemy(id).unwrap().center() - origin;
        assert!((moved.x - 68.0).abs() < 1e-3);
        assert!(moved.y.abs() < 1e-3);
    }

    #[test]
    fn test_sword_cooldown() {
        let mut state = GameState::new(Settings::default());
        let aim = state.player.center() + Vec2::new(10.0, 0.0);
        assert!(try_swing(&mut state, aim, 1_000).is_some());
        assert!(try_swing(&mut state, aim, 1_299).is_none());
        assert_eq!(state.player.last_swing_ms, Some(1_000));
        assert!(try_swing(&mut state, aim, 1_300).is_some());
    }

    #[test]
    fn test_sweep_wraps_across_pi() {
        let origin = Vec2::new(0.0, 0.0);
        let aim_angle = std::f32::consts::PI - 0.1;
        let target = Vec2::new(-100.0, -5.0);
        assert!(in_sweep(origin, aim_angle, target, 120.0, 0.8));
    }

    #[test]
    fn test_flame_rider_primes_status() {
        let mut state = GameState::new(Settings::default());
        state.run.abilities.insert(Ability::Flame);
        let id = spawn(&mut state, EnemyKind::Normal, Vec2::new(100.0, 100.0));
        strike(&mut state, id, 20, 7_000);
        let enemy = state.enemy(id).unwrap();
        assert_eq!(enemy.hp, 20);
        assert_eq!(enemy.burn_ms_left, 3000);
        assert_eq!(enemy.last_status_tick, 6_000);
    }

    #[test]
    fn test_lightning_rider_chains() {
        let mut state = GameState::new(Settings::default());
        state.run.abilities.insert(Ability::Lightning);
        let primary = spawn(&mut state, EnemyKind::Normal, Vec2::new(300.0, 300.0));
        let a = spawn(&mut state, EnemyKind::Normal, Vec2::new(360.0, 300.0));
        let b = spawn(&mut state, EnemyKind::Normal, Vec2::new(300.0, 370.0));
        let c = spawn(&mut state, EnemyKind::Normal, Vec2::new(450.0, 300.0));

        strike(&mut state, primary, 21, 1_000);
        assert_eq!(state.enemy(primary).unwrap().hp, 19);
        assert_eq!(state.enemy(a).unwrap().hp, 30);
        assert_eq!(state.enemy(b).unwrap().hp, 30);
        assert_eq!(state.enemy(c).unwrap().hp, 40);
        // Zero-length marker at the victim plus one arc per secondary
        assert_eq!(state.effects.lightning.len(), 3);
    }
}
