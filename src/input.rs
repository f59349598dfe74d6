//! Key bindings
//!
//! Device polling lives outside the crate; the shell reports which keys are
//! down and this module turns them into a `TickInput`.

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reacts to; anything else is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Num1,
    Num2,
    Escape,
    Return,
}

impl Key {
    /// Parse a key name as reported by a windowing layer
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "w" => Some(Key::W),
            "a" => Some(Key::A),
            "s" => Some(Key::S),
            "d" => Some(Key::D),
            "1" => Some(Key::Num1),
            "2" => Some(Key::Num2),
            "escape" | "esc" => Some(Key::Escape),
            "return" | "enter" => Some(Key::Return),
            _ => None,
        }
    }
}

impl TickInput {
    /// Build one tick of input from the pressed keys and pointer state
    pub fn from_keys(pressed: &[Key], pointer: Vec2, clicked: bool, quit: bool) -> Self {
        let down = |k: Key| pressed.contains(&k);
        Self {
            up: down(Key::W),
            down: down(Key::S),
            left: down(Key::A),
            right: down(Key::D),
            pointer,
            click: clicked,
            select_bow: down(Key::Num1),
            select_sword: down(Key::Num2),
            confirm: down(Key::Return),
            escape: down(Key::Escape),
            quit,
        }
    }
}
