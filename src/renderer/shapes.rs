//! Inline sprites and their screen-space transform

use glam::Vec2;

use super::vertex::{DrawCommand, Rgb};
use crate::sim::Pose;

/// Robot sprite, centred on the draw centre, facing right
pub const ROBOT_IMAGE: [&[Vec2]; 4] = [
    // Head
    &[
        Vec2::new(-3.0, -16.0),
        Vec2::new(2.0, -15.0),
        Vec2::new(2.0, -10.0),
        Vec2::new(-2.0, -10.0),
        Vec2::new(-3.0, -16.0),
    ],
    // Torso
    &[
        Vec2::new(4.0, -5.0),
        Vec2::new(4.0, 0.0),
        Vec2::new(-4.0, 0.0),
        Vec2::new(-4.0, -10.0),
        Vec2::new(4.0, -10.0),
    ],
    // Legs
    &[
        Vec2::new(-1.0, 0.0),
        Vec2::new(3.0, 0.0),
        Vec2::new(4.0, 10.0),
        Vec2::new(-8.0, 10.0),
        Vec2::new(-1.0, 0.0),
    ],
    // Arm/gun
    &[
        Vec2::new(0.0, -10.0),
        Vec2::new(10.0, -10.0),
        Vec2::new(10.0, -5.0),
        Vec2::new(0.0, -5.0),
        Vec2::new(0.0, -10.0),
    ],
];

/// Bullet streak trailing behind its tip
pub const BULLET_IMAGE: [&[Vec2]; 1] = [&[Vec2::new(0.0, 0.0), Vec2::new(-20.0, 0.0)]];

/// Transform each sprite line by `pose` into a stroked polyline
pub fn sprite(pose: &Pose, lines: &[&[Vec2]], color: Rgb) -> Vec<DrawCommand> {
    lines
        .iter()
        .map(|line| DrawCommand::Polyline {
            points: line.iter().map(|&p| pose.to_screen(p)).collect(),
            color,
        })
        .collect()
}
