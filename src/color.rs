//! RGB colors used by entities, effects and the HUD

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const GREY: Color = Color(90, 90, 90);
    pub const RED: Color = Color(220, 40, 40);
    pub const DARK_RED: Color = Color(130, 0, 0);
    pub const YELLOW: Color = Color(240, 220, 40);
    pub const CYAN: Color = Color(0, 200, 220);
    pub const ORANGE: Color = Color(255, 140, 0);
    pub const PURPLE: Color = Color(170, 60, 220);
    pub const GREEN: Color = Color(60, 200, 90);
    pub const BLUE: Color = Color(70, 130, 240);
    pub const BOSS: Color = Color(100, 10, 60);
    pub const BACKGROUND: Color = Color(18, 18, 24);
    pub const LIGHTNING: Color = Color(180, 220, 255);
}
