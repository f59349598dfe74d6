//! Fixed timestep simulation tick
//!
//! Core game loop that advances the run by one frame. Every sub-update sees
//! the same `now_ms`.

use glam::Vec2;

use super::ai;
use super::entity::Weapon;
use super::spawner::boss_try_summon;
use super::state::GameState;
use super::status::tick_status;
use super::wave::{self, WavePhase};
use super::weapon::{fire_arrow, resolve_arrow_hits, try_swing};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction keys
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pointer position in arena coordinates
    pub pointer: Vec2,
    /// Primary button pressed this frame
    pub click: bool,
    /// Select bow (also picks the first upgrade option)
    pub select_bow: bool,
    /// Select sword (also picks the second upgrade option)
    pub select_sword: bool,
    /// Return key (dismisses game over)
    pub confirm: bool,
    /// Escape: leave the run
    pub escape: bool,
    /// Window close
    pub quit: bool,
}

/// What the outer shell should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    GameOver,
    ExitToMenu,
    Quit,
}

/// Advance the run by one frame at wall-clock time `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: i64) -> TickOutcome {
    if input.quit {
        log::info!("Quit requested");
        return TickOutcome::Quit;
    }
    if input.escape {
        log::info!("Leaving run at wave {}", state.run.wave);
        state.clear_field();
        return TickOutcome::ExitToMenu;
    }

    let dt_ms = if state.time_ticks == 0 {
        0
    } else {
        (now_ms - state.now_ms).max(0)
    };
    state.now_ms = now_ms;
    state.time_ticks += 1;

    // Picker shortcuts act on the press, not on a key still held from combat
    let [bow_held, sword_held] = state.select_held;
    let pick_first = input.select_bow && !bow_held;
    let pick_second = input.select_sword && !sword_held;
    state.select_held = [input.select_bow, input.select_sword];

    if state.phase.is_modal() {
        advance_modal(state, input, pick_first, pick_second, now_ms);
        return TickOutcome::Running;
    }
    match state.phase {
        WavePhase::GameOver => {
            return if input.click || input.confirm {
                TickOutcome::ExitToMenu
            } else {
                TickOutcome::GameOver
            };
        }
        WavePhase::Preparing => wave::start_wave(state, now_ms),
        _ => {}
    }

    // 1. Weapon selection and attacks
    if input.select_bow {
        state.player.weapon = Weapon::Bow;
    }
    if input.select_sword {
        state.player.weapon = Weapon::Sword;
    }
    if input.click {
        match state.player.weapon {
            Weapon::Bow => fire_arrow(state, input.pointer),
            Weapon::Sword => {
                try_swing(state, input.pointer, now_ms);
            }
        }
    }

    // 2. Player movement
    move_player(state, input);

    // 3-4. Projectile motion
    let arena = state.arena;
    for arrow in &mut state.arrows {
        arrow.advance();
    }
    state.arrows.retain(|a| arena.overlaps(&a.rect));
    for shot in &mut state.enemy_shots {
        shot.advance();
    }
    state.enemy_shots.retain(|s| arena.overlaps(&s.rect));

    // 5. Enemy AI, status, contact
    if update_enemies(state, now_ms) {
        return game_over(state);
    }

    // 6. Enemy shots against the player
    if resolve_enemy_shots(state) {
        return game_over(state);
    }

    // 7. Arrows against enemies
    resolve_arrow_hits(state, now_ms);

    // 8. Wave clear
    if state.enemies.is_empty() {
        wave::mark_cleared(state);
    }

    // 9. Effects
    state.effects.age(dt_ms);

    TickOutcome::Running
}

/// Between-wave screens: roll the offer, take a pick, count down
fn advance_modal(state: &mut GameState, input: &TickInput, first: bool, second: bool, now_ms: i64) {
    match state.phase {
        WavePhase::Cleared => wave::open_upgrade(state),
        WavePhase::Upgrade { .. } => {
            let click = input.click.then_some(input.pointer);
            wave::handle_upgrade_input(state, first, second, click, now_ms);
        }
        WavePhase::Countdown { .. } => wave::advance_countdown(state, now_ms),
        _ => {}
    }
}

fn move_player(state: &mut GameState, input: &TickInput) {
    let speed = state.settings.player_speed;
    let mut step = Vec2::ZERO;
    if input.up {
        step.y -= speed;
    }
    if input.down {
        step.y += speed;
    }
    if input.left {
        step.x -= speed;
    }
    if input.right {
        step.x += speed;
    }
    state.player.rect.translate(step);
    let arena = state.arena;
    arena.clamp(&mut state.player.rect);
}

/// Run every enemy over a snapshot of the current ids
///
/// Minis summoned this frame start acting next frame. Returns true when
/// contact damage killed the player.
fn update_enemies(state: &mut GameState, now_ms: i64) -> bool {
    let ids: Vec<u32> = state.enemies.iter().map(|e| e.id).collect();
    let shot_damage = state.settings.archer_shot_damage;

    for id in ids {
        let Some(is_boss) = state.enemy(id).map(|e| e.is_boss) else {
            continue;
        };
        if is_boss {
            boss_try_summon(state, id, now_ms);
        }

        let target = state.player.center();
        let Some(enemy) = state.enemy_mut(id) else {
            continue;
        };
        let shot = ai::try_shoot(enemy, target, shot_damage, now_ms);
        ai::pursue(enemy, target);
        if let Some(shot) = shot {
            state.enemy_shots.push(shot);
        }

        tick_status(state, id, now_ms);

        let Some(enemy) = state.enemy(id) else {
            continue;
        };
        if enemy.hp <= 0 {
            state.kill_enemy(id);
            continue;
        }
        if enemy.rect.intersects(&state.player.rect) {
            let damage = enemy.damage;
            state.remove_enemy(id);
            if state.damage_player(damage) {
                return true;
            }
        }
    }
    false
}

/// Returns true when a shot killed the player
fn resolve_enemy_shots(state: &mut GameState) -> bool {
    let player = state.player.rect;
    let mut i = 0;
    while i < state.enemy_shots.len() {
        if state.enemy_shots[i].rect.intersects(&player) {
            let shot = state.enemy_shots.remove(i);
            if state.damage_player(shot.damage) {
                return true;
            }
        } else {
            i += 1;
        }
    }
    false
}

fn game_over(state: &mut GameState) -> TickOutcome {
    log::info!(
        "Game over at wave {} with score {}",
        state.run.wave,
        state.run.score
    );
    state.phase = WavePhase::GameOver;
    TickOutcome::GameOver
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_MS;
    use crate::settings::Settings;
    use crate::sim::entity::{Enemy, EnemyKind, EnemyProjectile};
    use crate::sim::upgrade::Ability;

    /// A run whose first wave has started, with its spawned enemies removed
    fn empty_active_state() -> GameState {
        let mut state = GameState::new(Settings::default());
        wave::start_wave(&mut state, 0);
        state.enemies.clear();
        state
    }

    fn spawn(state: &mut GameState, kind: EnemyKind, at: Vec2) -> u32 {
        let id = state.next_entity_id();
        let enemy = Enemy::regular(id, kind, at, 0, state.rng());
        state.enemies.push(enemy);
        id
    }

    #[test]
    fn test_first_tick_spawns_wave() {
        let mut state = GameState::new(Settings::default());
        let outcome = tick(&mut state, &TickInput::default(), 0);
        assert_eq!(outcome, TickOutcome::Running);
        assert_eq!(state.phase, WavePhase::Active);
        assert_eq!(state.enemies.len(), 5);
    }

    #[test]
    fn test_bow_scenario_through_tick() {
        let mut state = empty_active_state();
        let player = state.player.center();
        let target = player + Vec2::new(300.0, 0.0);
        let id = spawn(&mut state, EnemyKind::Normal, target);
        // Keep a far-away enemy so the wave does not clear
        spawn(&mut state, EnemyKind::Tank, Vec2::new(-500.0, -500.0));

        let mut now = 1_000;
        let fire = TickInput {
            click: true,
            pointer: target,
            ..Default::default()
        };
        tick(&mut state, &fire, now);
        for _ in 0..30 {
            now += FRAME_MS;
            tick(&mut state, &TickInput::default(), now);
        }
        assert_eq!(state.enemy(id).unwrap().hp, 20);

        let aim = state.enemy(id).unwrap().center();
        tick(&mut state, &TickInput { click: true, pointer: aim, ..Default::default() }, now);
        for _ in 0..30 {
            now += FRAME_MS;
            tick(&mut state, &TickInput::default(), now);
        }
        assert!(state.enemy(id).is_none());
        assert_eq!(state.run.score, 1);
    }

    #[test]
    fn test_flame_ticks_after_hit() {
        let mut state = empty_active_state();
        state.run.abilities.insert(Ability::Flame);
        let player = state.player.center();
        let id = spawn(&mut state, EnemyKind::Tank, player + Vec2::new(-300.0, 0.0));
        state.enemy_mut(id).unwrap().speed = 0.0;

        let mut now = 20_000;
        tick(&mut state, &TickInput { click: true, pointer: player + Vec2::new(-300.0, 0.0), ..Default::default() }, now);
        let mut hp_after_hit = None;
        for _ in 0..(5 * 60) {
            now += FRAME_MS;
            tick(&mut state, &TickInput::default(), now);
            if hp_after_hit.is_none() && state.enemy(id).unwrap().hp < 80 {
                hp_after_hit = Some(state.enemy(id).unwrap().hp);
            }
        }
        // 80 - 20 (arrow) - 3 * 5 (burn)
        assert_eq!(hp_after_hit, Some(60));
        assert_eq!(state.enemy(id).unwrap().hp, 45);
        assert_eq!(state.enemy(id).unwrap().burn_ms_left, 0);
    }

    #[test]
    fn test_contact_removes_enemy_and_hurts_player() {
        let mut state = empty_active_state();
        let player = state.player.center();
        let id = spawn(&mut state, EnemyKind::Tank, player + Vec2::new(20.0, 0.0));
        spawn(&mut state, EnemyKind::Tank, Vec2::new(-500.0, -500.0));
        tick(&mut state, &TickInput::default(), 100);
        assert!(state.enemy(id).is_none());
        assert_eq!(state.run.player_hp, 85);
        assert_eq!(state.run.score, 0);
    }

    #[test]
    fn test_enemy_shot_hits_player() {
        let mut state = empty_active_state();
        spawn(&mut state, EnemyKind::Tank, Vec2::new(-500.0, -500.0));
        let player = state.player.center();
        state
            .enemy_shots
            .push(EnemyProjectile::aimed(player + Vec2::new(-20.0, 0.0), player, 10));
        tick(&mut state, &TickInput::default(), 100);
        assert!(state.enemy_shots.is_empty());
        assert_eq!(state.run.player_hp, 90);
    }

    #[test]
    fn test_game_over_and_dismiss() {
        let mut state = empty_active_state();
        state.run.player_hp = 5;
        let player = state.player.center();
        spawn(&mut state, EnemyKind::Normal, player);
        let outcome = tick(&mut state, &TickInput::default(), 100);
        assert_eq!(outcome, TickOutcome::GameOver);
        assert_eq!(state.run.player_hp, 0);
        assert_eq!(state.phase, WavePhase::GameOver);

        assert_eq!(tick(&mut state, &TickInput::default(), 200), TickOutcome::GameOver);
        let dismiss = TickInput { confirm: true, ..Default::default() };
        assert_eq!(tick(&mut state, &dismiss, 300), TickOutcome::ExitToMenu);
    }

    #[test]
    fn test_escape_and_quit() {
        let mut state = GameState::new(Settings::default());
        tick(&mut state, &TickInput::default(), 0);
        let esc = TickInput { escape: true, ..Default::default() };
        assert_eq!(tick(&mut state, &esc, 16), TickOutcome::ExitToMenu);
        assert!(state.enemies.is_empty());
        let quit = TickInput { quit: true, ..Default::default() };
        assert_eq!(tick(&mut state, &quit, 32), TickOutcome::Quit);
    }

    #[test]
    fn test_movement_clamped_to_arena() {
        let mut state = empty_active_state();
        spawn(&mut state, EnemyKind::Tank, Vec2::new(-500.0, -500.0));
        let left = TickInput { left: true, up: true, ..Default::default() };
        for t in 0..400 {
            tick(&mut state, &left, t * FRAME_MS);
        }
        assert_eq!(state.player.rect.x, 0.0);
        assert_eq!(state.player.rect.y, 0.0);
    }

    #[test]
    fn test_wave_progression_cycle() {
        let mut state = GameState::new(Settings::default());
        tick(&mut state, &TickInput::default(), 0);
        state.enemies.clear();
        tick(&mut state, &TickInput::default(), 16);
        assert_eq!(state.phase, WavePhase::Cleared);
        tick(&mut state, &TickInput::default(), 32);
        assert!(matches!(state.phase, WavePhase::Upgrade { .. }));

        // Modal: player does not move while choosing
        let before = state.player.rect;
        let held = TickInput { right: true, ..Default::default() };
        tick(&mut state, &held, 48);
        assert_eq!(state.player.rect, before);

        tick(&mut state, &TickInput { select_bow: true, ..Default::default() }, 64);
        assert!(matches!(state.phase, WavePhase::Countdown { seconds_left: 5, .. }));
        let mut now = 64;
        while !matches!(state.phase, WavePhase::Preparing) {
            now += FRAME_MS;
            tick(&mut state, &TickInput::default(), now);
        }
        assert!(now >= 64 + 5_000);
        assert_eq!(state.run.wave, 2);
        assert_eq!(state.run.enemies_per_wave, 6);

        tick(&mut state, &TickInput::default(), now + FRAME_MS);
        assert_eq!(state.phase, WavePhase::Active);
        assert_eq!(state.enemies.len(), 6);
    }

    #[test]
    fn test_held_select_key_does_not_pick_upgrade() {
        let mut state = GameState::new(Settings::default());
        tick(&mut state, &TickInput::default(), 0);
        state.enemies.clear();

        // Key 1 held since combat, through the clear and into the picker
        let held = TickInput { select_bow: true, ..Default::default() };
        tick(&mut state, &held, 16);
        assert_eq!(state.phase, WavePhase::Cleared);
        tick(&mut state, &held, 32);
        tick(&mut state, &held, 48);
        tick(&mut state, &held, 64);
        assert!(matches!(state.phase, WavePhase::Upgrade { .. }));

        tick(&mut state, &TickInput::default(), 80);
        assert!(matches!(state.phase, WavePhase::Upgrade { .. }));
        tick(&mut state, &held, 96);
        assert!(matches!(state.phase, WavePhase::Countdown { .. }));
    }

    #[test]
    fn test_boss_wave_spawns_single_boss() {
        let mut state = GameState::new(Settings::default());
        state.run.wave = 10;
        tick(&mut state, &TickInput::default(), 0);
        assert_eq!(state.enemies.len(), 1);
        assert!(state.enemies[0].is_boss);
    }

    #[test]
    fn test_status_kill_credits_before_arrow() {
        let mut state = empty_active_state();
        spawn(&mut state, EnemyKind::Tank, Vec2::new(-500.0, -500.0));
        let player = state.player.center();
        let id = spawn(&mut state, EnemyKind::Normal, player + Vec2::new(200.0, 0.0));
        {
            let e = state.enemy_mut(id).unwrap();
            e.hp = 5;
            e.speed = 0.0;
            e.burn_ms_left = 3000;
            e.last_status_tick = 0;
        }
        // An arrow already overlapping the enemy
        fire_arrow(&mut state, player + Vec2::new(200.0, 0.0));
        state.arrows[0].rect.set_center(player + Vec2::new(200.0 - 18.0, 0.0));
        tick(&mut state, &TickInput::default(), 5_000);
        assert!(state.enemy(id).is_none());
        assert_eq!(state.run.score, 1);
        // Arrow found nothing left to hit and flies on
        assert_eq!(state.arrows.len(), 1);
    }
}
