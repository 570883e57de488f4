//! Draw command types for the display list

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGB stroke/fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One backend-agnostic drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    /// Stroke connected lines, one-pixel wide
    Polyline { points: Vec<Vec2>, color: Rgb },
    /// Fill text with its baseline starting at `pos`
    Text { text: String, pos: Vec2 },
}

/// Colors for game elements
pub mod colors {
    use super::Rgb;

    pub const PLAYER: Rgb = Rgb(0, 0, 255);
    pub const ENEMY: Rgb = Rgb(150, 0, 0);
    pub const BULLET: Rgb = Rgb(0, 0, 255);
}
