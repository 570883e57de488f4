//! Enemy autopilot
//!
//! The opponent hovers toward a fixed station and synthesises the same
//! `InputState` a human would produce.

use glam::Vec2;

use super::input::InputState;
use super::state::Fighter;

/// Point the enemy tries to hold
pub const ENEMY_STATION: Vec2 = Vec2::new(250.0, 200.0);
/// Horizontal slack before the pilot corrects
pub const STATION_TOLERANCE: f32 = 6.0;

/// Input for one frame of the enemy's autopilot
pub fn enemy_input(fighter: &Fighter) -> InputState {
    let mut input = InputState::default();

    let distance_x = (ENEMY_STATION.x - fighter.pos.x).abs();
    if distance_x > STATION_TOLERANCE {
        if ENEMY_STATION.x < fighter.pos.x {
            input.l_left = true;
        } else {
            input.l_right = true;
        }
    }

    // Thrust whenever below the station height
    input.l_top = ENEMY_STATION.y < fighter.pos.y;

    input
}
