//! Robo Duel - A side-view robot fighting demo
//!
//! Core modules:
//! - `sim`: Simulation (fighters, bullets, hit detection, game state)
//! - `renderer`: Backend-agnostic display list for the 320x240 surface
//! - `platform`: Input unification and frame timing
//! - `settings`: User-tunable configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame interval in milliseconds (~30 fps)
    pub const FRAME_INTERVAL_MS: u64 = 33;

    /// Drawing surface dimensions
    pub const SCREEN_WIDTH: f32 = 320.0;
    pub const SCREEN_HEIGHT: f32 = 240.0;

    /// Ground level; fighters fall until they reach this y
    pub const HORIZON_HEIGHT: f32 = 220.0;
    /// Sprites are drawn this far above the fighter's feet
    pub const DRAW_CENTER_HEIGHT: f32 = 10.0;

    /// Fighter movement
    pub const WALK_SPEED: f32 = 3.0;
    pub const WALK_ACCEL: f32 = 0.5;
    pub const THRUST: f32 = 1.6;
    pub const GRAVITY: f32 = 0.6;
    pub const HORIZONTAL_DAMPING: f32 = 0.8;

    /// Aiming (degrees)
    pub const AIM_STEP: f32 = 8.0;
    pub const AIM_LIMIT: f32 = 40.0;

    /// Fire cooldown; bullets spawn while the counter is above `FIRE_BURST_FLOOR`
    pub const FIRE_COOLDOWN: u32 = 10;
    pub const FIRE_BURST_FLOOR: u32 = 5;

    /// Bullet muzzle speed along the firer's aim
    pub const BULLET_SPEED: f32 = 30.0;
    /// Fraction of bullet velocity transferred to a fighter on hit
    pub const KNOCKBACK_DIVISOR: f32 = 10.0;

    /// Bullets outside this box are removed
    pub const BULLET_MIN_X: f32 = -20.0;
    pub const BULLET_MAX_X: f32 = 340.0;
    pub const BULLET_MIN_Y: f32 = -20.0;
    pub const BULLET_MAX_Y: f32 = 260.0;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Rotate a vector by `degrees` (positive is clockwise on a y-down screen)
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(deg_to_rad(degrees)).rotate(v)
}

/// Rotate a vector, then flip its x axis when `backward`
#[inline]
pub fn rotate_mirrored(v: Vec2, degrees: f32, backward: bool) -> Vec2 {
    let r = rotate_deg(v, degrees);
    if backward { Vec2::new(-r.x, r.y) } else { r }
}
