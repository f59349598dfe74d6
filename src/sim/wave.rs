//! Wave progression state machine
//!
//! Preparing -> Active -> Cleared -> Upgrade -> Countdown -> Preparing.
//! The modal phases (Upgrade, Countdown) and GameOver are plain states
//! advanced by the regular tick, so one frame clock drives everything.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spawner::{spawn_boss, spawn_wave};
use super::state::{GameState, RunState};
use super::upgrade::{self, Upgrade};
use crate::consts::{BOSS_WAVE_INTERVAL, COUNTDOWN_SECONDS, COUNTDOWN_STEP_MS, WAVE_GROWTH};

/// Where the run is in its wave cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Next tick spawns the current wave
    Preparing,
    /// Combat in progress
    Active,
    /// Every enemy is gone; the upgrade offer is rolled next tick
    Cleared,
    /// Waiting for the player to pick one of `offer`
    Upgrade { offer: Vec<Upgrade> },
    /// "Next Wave in s", each second shown for one second of wall time
    Countdown { seconds_left: u32, shown_at_ms: i64 },
    /// Run ended
    GameOver,
}

impl WavePhase {
    /// True for phases that freeze the simulation
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            WavePhase::Cleared | WavePhase::Upgrade { .. } | WavePhase::Countdown { .. }
        )
    }
}

pub fn is_boss_wave(wave: u32) -> bool {
    wave % BOSS_WAVE_INTERVAL == 0
}

/// Population of the wave after one with `current` enemies
///
/// Halves round to even, so 15 grows to 16.
pub fn next_enemies_per_wave(current: u32) -> u32 {
    ((f64::from(current) * WAVE_GROWTH).round_ties_even() as u32).max(1)
}

/// Spawn the current wave and re-center the player
pub fn start_wave(state: &mut GameState, now_ms: i64) {
    if is_boss_wave(state.run.wave) {
        spawn_boss(state, now_ms);
    } else {
        let count = state.run.enemies_per_wave;
        spawn_wave(state, count, now_ms);
    }
    state.recenter_player();
    state.phase = WavePhase::Active;
}

pub fn mark_cleared(state: &mut GameState) {
    log::info!("Wave {} cleared (score {})", state.run.wave, state.run.score);
    state.phase = WavePhase::Cleared;
}

/// Roll the upgrade offer
pub fn open_upgrade(state: &mut GameState) {
    let offer = upgrade::offer(&state.run, &state.settings, &mut state.rng);
    state.phase = WavePhase::Upgrade { offer };
}

/// Take option `index` of the current offer and start the countdown
///
/// Anything other than a valid option while the picker is open is ignored.
pub fn choose_upgrade(state: &mut GameState, index: usize, now_ms: i64) -> bool {
    let WavePhase::Upgrade { offer } = &state.phase else {
        return false;
    };
    let Some(&choice) = offer.get(index) else {
        return false;
    };
    upgrade::apply(&mut state.run, &state.settings, choice);
    state.phase = WavePhase::Countdown {
        seconds_left: COUNTDOWN_SECONDS,
        shown_at_ms: now_ms,
    };
    true
}

/// Resolve picker input: number keys or a click on a button
pub fn handle_upgrade_input(
    state: &mut GameState,
    first: bool,
    second: bool,
    click: Option<Vec2>,
    now_ms: i64,
) -> bool {
    let WavePhase::Upgrade { offer } = &state.phase else {
        return false;
    };
    let count = offer.len();
    let index = if first {
        Some(0)
    } else if second {
        Some(1)
    } else {
        click.and_then(|p| upgrade::option_at(&state.arena, count, p))
    };
    index.is_some_and(|i| choose_upgrade(state, i, now_ms))
}

/// Count down; once the last second has elapsed, move to the next wave
pub fn advance_countdown(state: &mut GameState, now_ms: i64) {
    let WavePhase::Countdown {
        seconds_left,
        shown_at_ms,
    } = &mut state.phase
    else {
        return;
    };
    while *seconds_left > 0 && now_ms - *shown_at_ms >= COUNTDOWN_STEP_MS {
        *seconds_left -= 1;
        *shown_at_ms += COUNTDOWN_STEP_MS;
    }
    if *seconds_left == 0 {
        advance_wave(&mut state.run);
        log::info!(
            "Wave {} incoming ({} enemies)",
            state.run.wave,
            state.run.enemies_per_wave
        );
        state.phase = WavePhase::Preparing;
    }
}

/// Bump the wave index and grow the population
pub fn advance_wave(run: &mut RunState) {
    run.wave += 1;
    run.enemies_per_wave = next_enemies_per_wave(run.enemies_per_wave);
}
