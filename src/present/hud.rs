//! HUD and modal overlays

use glam::Vec2;

use super::{Canvas, Font};
use crate::color::Color;
use crate::sim::upgrade::option_rects;
use crate::sim::{Ability, GameState, Rect, WavePhase, Weapon};

const MARGIN: f32 = 16.0;
const LINE: f32 = 24.0;
const HP_BAR_W: f32 = 200.0;
const HP_BAR_H: f32 = 14.0;

/// Wave, score, health, weapon and abilities
pub fn draw_hud<C: Canvas>(state: &GameState, canvas: &mut C) {
    let run = &state.run;
    let mut y = MARGIN;

    let line = canvas.text(Font::Medium, &format!("Wave {}", run.wave), Color::WHITE);
    canvas.blit(&line, Vec2::new(MARGIN, y));
    y += LINE;
    let line = canvas.text(Font::Medium, &format!("Score {}", run.score), Color::WHITE);
    canvas.blit(&line, Vec2::new(MARGIN, y));
    y += LINE;

    let frame = Rect::new(MARGIN, y, HP_BAR_W, HP_BAR_H);
    let frac = run.player_hp.max(0) as f32 / state.settings.max_hp.max(1) as f32;
    canvas.rect(Color::GREEN, Rect { w: HP_BAR_W * frac, ..frame }, None);
    canvas.rect(Color::WHITE, frame, Some(2.0));
    y += LINE;

    let weapon = match state.player.weapon {
        Weapon::Bow => "Weapon: Bow [1]",
        Weapon::Sword => "Weapon: Sword [2]",
    };
    let line = canvas.text(Font::Small, weapon, Color::WHITE);
    canvas.blit(&line, Vec2::new(MARGIN, y));
    y += LINE;

    if !run.abilities.is_empty() {
        let owned: Vec<String> = run
            .abilities
            .iter()
            .map(|a| match a {
                Ability::Knockback => format!("Knockback {}", run.knockback_level),
                Ability::Piercing => format!("Piercing {}", run.pierce_level),
                other => other.name().to_string(),
            })
            .collect();
        let line = canvas.text(Font::Small, &owned.join("  "), Color::YELLOW);
        canvas.blit(&line, Vec2::new(MARGIN, y));
    }
}

/// Upgrade picker, countdown and game-over screens
pub fn draw_overlay<C: Canvas>(state: &GameState, canvas: &mut C) {
    let center = state.arena.center();
    match &state.phase {
        WavePhase::Upgrade { offer } => {
            let title = canvas.text(Font::Large, "Choose an upgrade", Color::WHITE);
            canvas.blit(&title, Vec2::new(center.x - 160.0, center.y - 120.0));
            for (i, (rect, upgrade)) in option_rects(&state.arena, offer.len())
                .into_iter()
                .zip(offer)
                .enumerate()
            {
                canvas.rect(Color::GREY, rect, None);
                canvas.rect(Color::WHITE, rect, Some(2.0));
                let label = format!("[{}] {}", i + 1, upgrade.label());
                let text = canvas.text(Font::Medium, &label, Color::WHITE);
                canvas.blit(&text, Vec2::new(rect.x + 16.0, rect.y + rect.h / 2.0 - 10.0));
            }
        }
        WavePhase::Countdown { seconds_left, .. } => {
            let msg = format!("Next Wave in {seconds_left}");
            let text = canvas.text(Font::Large, &msg, Color::WHITE);
            canvas.blit(&text, Vec2::new(center.x - 120.0, center.y - 20.0));
        }
        WavePhase::GameOver => {
            let title = canvas.text(Font::Large, "Game Over", Color::RED);
            canvas.blit(&title, Vec2::new(center.x - 100.0, center.y - 60.0));
            let score = canvas.text(
                Font::Medium,
                &format!("Score {}  -  Wave {}", state.run.score, state.run.wave),
                Color::WHITE,
            );
            canvas.blit(&score, Vec2::new(center.x - 110.0, center.y));
            let hint = canvas.text(Font::Small, "Click or press Return", Color::GREY);
            canvas.blit(&hint, Vec2::new(center.x - 90.0, center.y + 40.0));
        }
        WavePhase::Preparing | WavePhase::Active | WavePhase::Cleared => {}
    }
}
