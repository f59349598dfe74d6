//! A canvas that records draw calls instead of drawing
//!
//! Used by the headless binary and by tests.

use glam::Vec2;

use super::{Canvas, Font, Sprite};
use crate::color::Color;
use crate::sim::Rect;

/// A surface handed out by `Recorder`
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedSurface {
    Text { font: Font, text: String, color: Color, alpha: u8 },
    Sprite { sprite: Sprite, alpha: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect { color: Color, rect: Rect, stroke: Option<f32> },
    Line { color: Color, from: Vec2, to: Vec2, width: f32 },
    Arc { color: Color, bounds: Rect, start: f32, end: f32, width: f32 },
    Circle { color: Color, center: Vec2, radius: f32 },
    Blit { surface: RecordedSurface, pos: Vec2 },
    RotatedBlit { surface: RecordedSurface, degrees: f32, center: Vec2 },
}

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Every string blitted, in draw order
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Blit {
                    surface: RecordedSurface::Text { text, .. },
                    ..
                } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn arcs(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Arc { .. }))
            .count()
    }

    pub fn rotated_blits(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::RotatedBlit { .. }))
            .count()
    }
}

impl Canvas for Recorder {
    type Surface = RecordedSurface;

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn rect(&mut self, color: Color, rect: Rect, stroke: Option<f32>) {
        self.commands.push(DrawCommand::Rect { color, rect, stroke });
    }

    fn line(&mut self, color: Color, from: Vec2, to: Vec2, width: f32) {
        self.commands.push(DrawCommand::Line { color, from, to, width });
    }

    fn arc(&mut self, color: Color, bounds: Rect, start: f32, end: f32, width: f32) {
        self.commands.push(DrawCommand::Arc {
            color,
            bounds,
            start,
            end,
            width,
        });
    }

    fn circle(&mut self, color: Color, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle { color, center, radius });
    }

    fn text(&mut self, font: Font, text: &str, color: Color) -> RecordedSurface {
        RecordedSurface::Text {
            font,
            text: text.to_string(),
            color,
            alpha: 255,
        }
    }

    fn sprite(&mut self, sprite: Sprite) -> RecordedSurface {
        RecordedSurface::Sprite { sprite, alpha: 255 }
    }

    fn set_alpha(&mut self, surface: &mut RecordedSurface, value: u8) {
        match surface {
            RecordedSurface::Text { alpha, .. } | RecordedSurface::Sprite { alpha, .. } => {
                *alpha = value
            }
        }
    }

    fn blit(&mut self, surface: &RecordedSurface, top_left: Vec2) {
        self.commands.push(DrawCommand::Blit {
            surface: surface.clone(),
            pos: top_left,
        });
    }

    fn rotated_blit(&mut self, surface: &RecordedSurface, degrees: f32, center: Vec2) {
        self.commands.push(DrawCommand::RotatedBlit {
            surface: surface.clone(),
            degrees,
            center,
        });
    }
}
