//! Per-frame input snapshot consumed by the simulation

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Ten logical buttons: two virtual sticks plus two action buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    /// Left stick: movement and thrust
    pub l_left: bool,
    pub l_right: bool,
    pub l_top: bool,
    pub l_bottom: bool,
    /// Right stick: facing and aim
    pub r_left: bool,
    pub r_right: bool,
    pub r_top: bool,
    pub r_bottom: bool,
    pub a: bool,
    /// Fire
    pub b: bool,
}

/// Logical button identifiers, used by key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    LeftStickLeft,
    LeftStickRight,
    LeftStickTop,
    LeftStickBottom,
    RightStickLeft,
    RightStickRight,
    RightStickTop,
    RightStickBottom,
    A,
    B,
}

/// HUD glyph per button, in display order
const HUD_GLYPHS: [(Button, char); 10] = [
    (Button::LeftStickLeft, 'L'),
    (Button::LeftStickTop, 'T'),
    (Button::LeftStickRight, 'R'),
    (Button::LeftStickBottom, 'B'),
    (Button::RightStickLeft, 'l'),
    (Button::RightStickTop, 't'),
    (Button::RightStickRight, 'r'),
    (Button::RightStickBottom, 'b'),
    (Button::A, 'A'),
    (Button::B, 'B'),
];

impl InputState {
    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::LeftStickLeft => self.l_left,
            Button::LeftStickRight => self.l_right,
            Button::LeftStickTop => self.l_top,
            Button::LeftStickBottom => self.l_bottom,
            Button::RightStickLeft => self.r_left,
            Button::RightStickRight => self.r_right,
            Button::RightStickTop => self.r_top,
            Button::RightStickBottom => self.r_bottom,
            Button::A => self.a,
            Button::B => self.b,
        }
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        let flag = match button {
            Button::LeftStickLeft => &mut self.l_left,
            Button::LeftStickRight => &mut self.l_right,
            Button::LeftStickTop => &mut self.l_top,
            Button::LeftStickBottom => &mut self.l_bottom,
            Button::RightStickLeft => &mut self.r_left,
            Button::RightStickRight => &mut self.r_right,
            Button::RightStickTop => &mut self.r_top,
            Button::RightStickBottom => &mut self.r_bottom,
            Button::A => &mut self.a,
            Button::B => &mut self.b,
        };
        *flag = pressed;
    }

    /// Ten-character HUD label, `_` for released buttons
    ///
    /// Order: `L T R B l t r b A B` (left stick, right stick, buttons).
    pub fn hud_label(&self) -> String {
        HUD_GLYPHS
            .iter()
            .map(|&(button, c)| if self.is_pressed(button) { c } else { '_' })
            .collect()
    }
}

impl BitOr for InputState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            l_left: self.l_left | rhs.l_left,
            l_right: self.l_right | rhs.l_right,
            l_top: self.l_top | rhs.l_top,
            l_bottom: self.l_bottom | rhs.l_bottom,
            r_left: self.r_left | rhs.r_left,
            r_right: self.r_right | rhs.r_right,
            r_top: self.r_top | rhs.r_top,
            r_bottom: self.r_bottom | rhs.r_bottom,
            a: self.a | rhs.a,
            b: self.b | rhs.b,
        }
    }
}

impl BitOrAssign for InputState {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
