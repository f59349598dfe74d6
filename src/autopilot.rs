//! Scripted player for headless runs and soak tests
//!
//! Pure function of the game state, so a seeded run stays reproducible.

use glam::Vec2;

use crate::sim::{GameState, TickInput, WavePhase, Weapon};

/// Distance below which the autopilot backs away from its target
const KITE_DISTANCE: f32 = 160.0;
/// Bow fire period in ticks
const BOW_PERIOD: u64 = 8;

/// Choose this tick's input
pub fn drive(state: &GameState) -> TickInput {
    match state.phase {
        WavePhase::Upgrade { .. } => {
            // Release first if the key is still down from combat
            return TickInput {
                select_bow: !state.select_held[0],
                ..Default::default()
            };
        }
        WavePhase::GameOver => {
            return TickInput {
                confirm: true,
                ..Default::default()
            };
        }
        _ => {}
    }

    let player = state.player.center();
    let nearest = state.enemies.iter().min_by(|a, b| {
        a.center()
            .distance_squared(player)
            .total_cmp(&b.center().distance_squared(player))
    });
    let Some(target) = nearest else {
        return TickInput {
            pointer: state.arena.center(),
            ..Default::default()
        };
    };

    let aim = target.center();
    let dist = aim.distance(player);
    let want = if dist <= state.settings.sword_range * 0.9 {
        Weapon::Sword
    } else {
        Weapon::Bow
    };

    let mut input = TickInput {
        pointer: aim,
        select_bow: want == Weapon::Bow && state.player.weapon != Weapon::Bow,
        select_sword: want == Weapon::Sword && state.player.weapon != Weapon::Sword,
        ..Default::default()
    };
    input.click = match state.player.weapon {
        Weapon::Sword => true,
        Weapon::Bow => state.time_ticks % BOW_PERIOD == 0,
    };

    // Back off from close threats, sliding sideways over time to avoid corners
    if dist < KITE_DISTANCE {
        let away = player - aim;
        let drift = if (state.time_ticks / 90) % 2 == 0 { 1.0 } else { -1.0 };
        let slide = Vec2::new(-away.y, away.x) * drift * 0.5;
        let dir = away + slide;
        input.left = dir.x < -1.0;
        input.right = dir.x > 1.0;
        input.up = dir.y < -1.0;
        input.down = dir.y > 1.0;
    }
    input
}
