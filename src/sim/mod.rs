//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame
//! - Stable iteration order (entity list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod pilot;
pub mod state;
pub mod tick;

pub use collision::{Segment, hit_check, segments_intersect};
pub use input::{Button, InputState};
pub use pilot::enemy_input;
pub use state::{
    Bullet, Entity, Fighter, GameEvent, Pose, RemovalReason, World, ENEMY_LAYER, PLAYER_LAYER,
};
pub use tick::tick;
