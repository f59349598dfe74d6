//! Visual-only effects: floating numbers, dots, lightning arcs
//!
//! Written by the simulation, read by the presentation layer. Nothing here
//! feeds back into gameplay.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Default lifetime of a floating text, in ticks
pub const TEXT_TTL_TICKS: u32 = 40;
/// Floating texts drift upward this many pixels per tick
pub const TEXT_RISE: f32 = -1.0;
/// Alpha lost per tick by fading texts
pub const TEXT_FADE_PER_TICK: u8 = 4;
pub const DOT_TTL_TICKS: u32 = 30;
pub const DOT_RISE: f32 = -0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingText {
    pub pos: Vec2,
    pub text: String,
    pub color: Color,
    pub ttl: u32,
    pub dy: f32,
    pub alpha: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmallDot {
    pub pos: Vec2,
    pub color: Color,
    pub ttl: u32,
    pub dy: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightningSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub ttl_ms: i64,
}

/// All live effects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Effects {
    pub texts: Vec<FloatingText>,
    pub dots: Vec<SmallDot>,
    pub lightning: Vec<LightningSegment>,
}

impl Effects {
    /// A floating number that drifts up without fading
    pub fn text(&mut self, pos: Vec2, text: impl Into<String>, color: Color) {
        self.texts.push(FloatingText {
            pos,
            text: text.into(),
            color,
            ttl: TEXT_TTL_TICKS,
            dy: TEXT_RISE,
            alpha: None,
        });
    }

    /// A floating number that also fades out
    pub fn fading_text(&mut self, pos: Vec2, text: impl Into<String>, color: Color) {
        self.texts.push(FloatingText {
            pos,
            text: text.into(),
            color,
            ttl: TEXT_TTL_TICKS,
            dy: TEXT_RISE,
            alpha: Some(255),
        });
    }

    pub fn dot(&mut self, pos: Vec2, color: Color) {
        self.dots.push(SmallDot {
            pos,
            color,
            ttl: DOT_TTL_TICKS,
            dy: DOT_RISE,
        });
    }

    pub fn bolt(&mut self, from: Vec2, to: Vec2, ttl_ms: i64) {
        self.lightning.push(LightningSegment { from, to, ttl_ms });
    }

    /// Advance every effect by one tick of `dt_ms` wall time and drop the expired
    pub fn age(&mut self, dt_ms: i64) {
        for t in &mut self.texts {
            t.pos.y += t.dy;
            t.ttl = t.ttl.saturating_sub(1);
            if let Some(alpha) = t.alpha.as_mut() {
                *alpha = alpha.saturating_sub(TEXT_FADE_PER_TICK);
            }
        }
        self.texts.retain(|t| t.ttl > 0);

        for l in &mut self.lightning {
            l.ttl_ms -= dt_ms;
        }
        self.lightning.retain(|l| l.ttl_ms > 0);

        for d in &mut self.dots {
            d.pos.y += d.dy;
            d.ttl = d.ttl.saturating_sub(1);
        }
        self.dots.retain(|d| d.ttl > 0);
    }

    pub fn clear(&mut self) {
        self.texts.clear();
        self.dots.clear();
        self.lightning.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.dots.is_empty() && self.lightning.is_empty()
    }
}
