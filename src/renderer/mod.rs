//! Display list rendering
//!
//! Turns the world into an ordered list of draw commands for a 320x240
//! surface. A backend only needs to clear, stroke lines and draw text.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{DrawCommand, Rgb, colors};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::settings::Settings;
use crate::sim::{Entity, World};
use shapes::{BULLET_IMAGE, ROBOT_IMAGE, sprite};

/// Commands for one frame, starting with a clear
pub fn render(world: &World, settings: &Settings) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
    }];

    for entity in &world.entities {
        match entity {
            Entity::Player(f) => commands.extend(sprite(&f.pose(), &ROBOT_IMAGE, colors::PLAYER)),
            Entity::Enemy(f) => commands.extend(sprite(&f.pose(), &ROBOT_IMAGE, colors::ENEMY)),
            Entity::Bullet(b) => commands.extend(sprite(&b.pose(), &BULLET_IMAGE, colors::BULLET)),
            Entity::FpsHud if settings.show_fps => commands.push(DrawCommand::Text {
                text: fps_label(world),
                pos: Vec2::new(10.0, 15.0),
            }),
            Entity::InputHud if settings.show_input => commands.push(DrawCommand::Text {
                text: format!("controller: {}", world.input.hud_label()),
                pos: Vec2::new(10.0, 30.0),
            }),
            Entity::FpsHud | Entity::InputHud => {}
        }
    }

    commands
}

/// Objects counts the list as it stood when the frame's step began
fn fps_label(world: &World) -> String {
    format!("fps: {}, Objects: {}", world.fps, world.objects_at_step)
}
