//! Keyboard and gamepad unification
//!
//! Platform code feeds key events into a `KeyboardLatch` and polls a
//! `GamepadSnapshot` each frame; `unify` ORs both into one `InputState`.

use serde::{Deserialize, Serialize};

use crate::sim::{Button, InputState};

/// Default stick deflection needed to register a direction
pub const DEFAULT_AXIS_THRESHOLD: f32 = 0.5;

/// Physical key code (DOM `KeyboardEvent.code` naming) to logical button
pub fn button_for_key(code: &str) -> Option<Button> {
    let button = match code {
        "KeyA" => Button::LeftStickLeft,
        "KeyW" => Button::LeftStickTop,
        "KeyD" => Button::LeftStickRight,
        "KeyS" => Button::LeftStickBottom,
        "ArrowLeft" => Button::RightStickLeft,
        "ArrowUp" => Button::RightStickTop,
        "ArrowRight" => Button::RightStickRight,
        "ArrowDown" => Button::RightStickBottom,
        "Space" => Button::A,
        "ShiftLeft" | "ShiftRight" => Button::B,
        _ => return None,
    };
    Some(button)
}

/// Latched keyboard state: a key stays down until its key-up arrives
#[derive(Debug, Clone, Default)]
pub struct KeyboardLatch {
    state: InputState,
}

impl KeyboardLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for unmapped keys
    pub fn key_down(&mut self, code: &str) -> bool {
        self.set_key(code, true)
    }

    /// Returns false for unmapped keys
    pub fn key_up(&mut self, code: &str) -> bool {
        self.set_key(code, false)
    }

    fn set_key(&mut self, code: &str, pressed: bool) -> bool {
        match button_for_key(code) {
            Some(button) => {
                self.state.set(button, pressed);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> InputState {
        self.state
    }
}

/// One polled gamepad reading (standard mapping)
///
/// Axes: 0/1 left stick x/y, 2/3 right stick x/y. Buttons: 0 fires (b),
/// 1 is a. Missing axes or buttons read as neutral.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GamepadSnapshot {
    pub axes: Vec<f32>,
    pub buttons: Vec<bool>,
}

impl GamepadSnapshot {
    fn axis(&self, index: usize) -> f32 {
        self.axes.get(index).copied().unwrap_or(0.0)
    }

    fn button(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }

    /// Digital reading with strict threshold comparison
    pub fn to_input(&self, threshold: f32) -> InputState {
        let (lx, ly) = (self.axis(0), self.axis(1));
        let (rx, ry) = (self.axis(2), self.axis(3));
        InputState {
            l_left: lx < -threshold,
            l_right: lx > threshold,
            l_top: ly < -threshold,
            l_bottom: ly > threshold,
            r_left: rx < -threshold,
            r_right: rx > threshold,
            r_top: ry < -threshold,
            r_bottom: ry > threshold,
            a: self.button(1),
            b: self.button(0),
        }
    }
}

/// Merge keyboard and an optional gamepad into this frame's input
pub fn unify(
    keyboard: &KeyboardLatch,
    gamepad: Option<&GamepadSnapshot>,
    threshold: f32,
) -> InputState {
    let mut input = keyboard.state();
    if let Some(pad) = gamepad {
        input |= pad.to_input(threshold);
    }
    input
}
