//! Presentation adapter
//!
//! Projects a read-only `GameState` onto a drawing collaborator. The
//! collaborator owns the window, fonts and pixels; this module only decides
//! what goes where.

mod hud;
mod recorder;

pub use hud::{draw_hud, draw_overlay};
pub use recorder::{DrawCommand, Recorder, RecordedSurface};

use glam::Vec2;

use crate::color::Color;
use crate::consts::SWORD_SWING_VISIBLE_MS;
use crate::sim::{GameState, Rect, Weapon};

/// Font sizes the collaborator provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Small,
    Medium,
    Large,
}

/// Pre-made images the collaborator provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Arrow,
}

/// Drawing primitives consumed from the display layer
///
/// Arc angles are radians, counter-clockwise with y pointing up.
pub trait Canvas {
    type Surface;

    fn clear(&mut self, color: Color);
    /// Filled when `stroke` is `None`, outlined otherwise
    fn rect(&mut self, color: Color, rect: Rect, stroke: Option<f32>);
    fn line(&mut self, color: Color, from: Vec2, to: Vec2, width: f32);
    fn arc(&mut self, color: Color, bounds: Rect, start: f32, end: f32, width: f32);
    fn circle(&mut self, color: Color, center: Vec2, radius: f32);
    /// Rasterize a string
    fn text(&mut self, font: Font, text: &str, color: Color) -> Self::Surface;
    fn sprite(&mut self, sprite: Sprite) -> Self::Surface;
    fn set_alpha(&mut self, surface: &mut Self::Surface, alpha: u8);
    fn blit(&mut self, surface: &Self::Surface, top_left: Vec2);
    /// Draw rotated by `degrees` counter-clockwise, centered on `center`
    fn rotated_blit(&mut self, surface: &Self::Surface, degrees: f32, center: Vec2);
}

const STATUS_MARK_RADIUS: f32 = 4.0;
const DOT_RADIUS: f32 = 3.0;
const LIGHTNING_WIDTH: f32 = 3.0;

/// Draw one complete frame
pub fn draw<C: Canvas>(state: &GameState, canvas: &mut C) {
    canvas.clear(Color::BACKGROUND);

    draw_enemies(state, canvas);
    draw_player(state, canvas);

    let arrow = canvas.sprite(Sprite::Arrow);
    for a in &state.arrows {
        canvas.rotated_blit(&arrow, -a.angle.to_degrees(), a.rect.center());
    }
    for s in &state.enemy_shots {
        canvas.rect(Color::CYAN, s.rect, None);
    }

    draw_effects(state, canvas);
    draw_hud(state, canvas);
    draw_overlay(state, canvas);
}

fn draw_enemies<C: Canvas>(state: &GameState, canvas: &mut C) {
    for e in &state.enemies {
        canvas.rect(e.color, e.rect, None);
        if e.is_boss {
            let bar = Rect::new(e.rect.x, e.rect.y - 12.0, e.rect.w, 6.0);
            let frac = (e.hp.max(0) as f32 / e.max_hp.max(1) as f32).clamp(0.0, 1.0);
            canvas.rect(Color::GREY, bar, None);
            canvas.rect(Color::RED, Rect { w: bar.w * frac, ..bar }, None);
        }
        let mut mark = Vec2::new(e.rect.x + STATUS_MARK_RADIUS, e.rect.y - STATUS_MARK_RADIUS);
        if e.is_burning() {
            canvas.circle(Color::ORANGE, mark, STATUS_MARK_RADIUS);
            mark.x += STATUS_MARK_RADIUS * 2.5;
        }
        if e.is_poisoned() {
            canvas.circle(Color::PURPLE, mark, STATUS_MARK_RADIUS);
        }
    }
}

fn draw_player<C: Canvas>(state: &GameState, canvas: &mut C) {
    let player = &state.player;
    canvas.rect(Color::BLUE, player.rect, None);

    let Some(last) = player.last_swing_ms else {
        return;
    };
    if player.weapon != Weapon::Sword || state.now_ms - last >= SWORD_SWING_VISIBLE_MS {
        return;
    }
    let center = player.center();
    let aim = player.last_swing_aim - center;
    // Screen y points down; the collaborator's arc angles point up
    let aim_up = (-aim.y).atan2(aim.x);
    let half = state.settings.sword_arc_half();
    let reach = state.settings.sword_range;
    let bounds = Rect::from_center(center, reach * 2.0, reach * 2.0);
    canvas.arc(Color::WHITE, bounds, aim_up - half, aim_up + half, 3.0);
}

fn draw_effects<C: Canvas>(state: &GameState, canvas: &mut C) {
    for l in &state.effects.lightning {
        canvas.line(Color::LIGHTNING, l.from, l.to, LIGHTNING_WIDTH);
    }
    for d in &state.effects.dots {
        canvas.circle(d.color, d.pos, DOT_RADIUS);
    }
    for t in &state.effects.texts {
        let mut surface = canvas.text(Font::Small, &t.text, t.color);
        if let Some(alpha) = t.alpha {
            canvas.set_alpha(&mut surface, alpha);
        }
        canvas.blit(&surface, t.pos);
    }
}
