//! World state and entity types
//!
//! Everything the frame loop mutates lives in `World`, passed explicitly to
//! `tick` each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Segment, closed_outline};
use super::input::InputState;
use crate::consts::*;
use crate::rotate_mirrored;

/// Player's side
pub const PLAYER_LAYER: u8 = 0;
/// Enemy's side
pub const ENEMY_LAYER: u8 = 1;

/// Fighter hitbox corners in sprite space (closed rectangle)
const FIGHTER_HITBOX: [Vec2; 4] = [
    Vec2::new(-5.0, -15.0),
    Vec2::new(5.0, -15.0),
    Vec2::new(5.0, 10.0),
    Vec2::new(-5.0, 10.0),
];

/// Position, rotation and facing used to map sprite-local points to screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub origin: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
    /// Facing left (x axis mirrored)
    pub backward: bool,
}

impl Pose {
    /// Sprite-local point to screen point
    #[inline]
    pub fn to_screen(&self, local: Vec2) -> Vec2 {
        self.origin + self.to_screen_vector(local)
    }

    /// Sprite-local direction to screen direction (no translation)
    #[inline]
    pub fn to_screen_vector(&self, local: Vec2) -> Vec2 {
        rotate_mirrored(local, self.rotation, self.backward)
    }
}

/// A robot body, shared by the player and the AI opponent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub id: u32,
    /// Feet position; y grows downward
    pub pos: Vec2,
    /// Per-frame velocity
    pub vel: Vec2,
    /// Aim rotation in degrees, within [-AIM_LIMIT, AIM_LIMIT]
    pub rotation: f32,
    /// Facing left
    pub backward: bool,
    /// Counts down each frame; bullets spawn while above FIRE_BURST_FLOOR
    pub fire_counter: u32,
    pub layer: u8,
    /// Bullets that have struck this fighter
    #[serde(default)]
    pub hits_taken: u32,
}

impl Fighter {
    pub fn new(id: u32, x: f32, backward: bool, layer: u8) -> Self {
        Self {
            id,
            pos: Vec2::new(x, HORIZON_HEIGHT),
            vel: Vec2::ZERO,
            rotation: 0.0,
            backward,
            fire_counter: 0,
            layer,
            hits_taken: 0,
        }
    }

    /// Pose at the sprite's draw centre
    pub fn pose(&self) -> Pose {
        Pose {
            origin: self.pos - Vec2::new(0.0, DRAW_CENTER_HEIGHT),
            rotation: self.rotation,
            backward: self.backward,
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.pos.y < HORIZON_HEIGHT
    }

    /// Walk, thrust and aim from one frame of input
    pub fn apply_input(&mut self, input: &InputState) {
        if input.l_left {
            if -WALK_SPEED < self.vel.x && self.vel.x < 0.0 {
                self.vel.x = -WALK_SPEED;
            } else {
                self.vel.x -= WALK_ACCEL;
            }
            self.backward = true;
        }
        if input.l_right {
            if 0.0 < self.vel.x && self.vel.x < WALK_SPEED {
                self.vel.x = WALK_SPEED;
            } else {
                self.vel.x += WALK_ACCEL;
            }
            self.backward = false;
        }

        if input.l_top {
            self.vel.y -= THRUST;
        }

        if input.r_left {
            self.backward = true;
        }
        if input.r_right {
            self.backward = false;
        }
        if input.r_top {
            self.rotation -= AIM_STEP;
        }
        if input.r_bottom {
            self.rotation += AIM_STEP;
        }
        self.rotation = self.rotation.clamp(-AIM_LIMIT, AIM_LIMIT);
    }

    /// Advance the fire cooldown; returns true when a bullet spawns this frame
    pub fn update_trigger(&mut self, fire_held: bool) -> bool {
        if fire_held && self.fire_counter == 0 {
            self.fire_counter = FIRE_COOLDOWN;
        }
        let fires = self.fire_counter > FIRE_BURST_FLOOR;
        self.fire_counter = self.fire_counter.saturating_sub(1);
        fires
    }

    /// Current pose with the x mirror taken from `backward`
    fn aim_pose(&self, backward: bool) -> Pose {
        Pose {
            backward,
            ..self.pose()
        }
    }

    /// Muzzle position and velocity for a bullet fired from the current pose
    ///
    /// `backward` is the facing the frame started with; turning on the
    /// frame a shot leaves does not redirect it.
    pub fn muzzle(&self, backward: bool) -> (Vec2, Vec2) {
        let pose = self.aim_pose(backward);
        let pos = pose.to_screen(Vec2::new(0.0, -10.0));
        let vel = pose.to_screen_vector(Vec2::new(BULLET_SPEED, 0.0));
        (pos, vel)
    }

    /// Push back against the aim direction after firing
    pub fn apply_recoil(&mut self, backward: bool) {
        self.vel += self.aim_pose(backward).to_screen_vector(Vec2::new(-2.0, -0.3));
    }

    /// Gravity, damping, integration and ground clamp
    pub fn integrate(&mut self) {
        if self.is_airborne() {
            self.vel.y += GRAVITY;
        }

        if self.vel.x != 0.0 {
            self.vel.x *= HORIZONTAL_DAMPING;
        }

        self.pos += self.vel;

        if self.pos.y > HORIZON_HEIGHT {
            self.vel = Vec2::ZERO;
            self.pos.y = HORIZON_HEIGHT;
        }
    }

    /// Closed rectangle around the body in screen space
    pub fn hitbox(&self) -> Vec<Segment> {
        let pose = self.pose();
        let corners: Vec<Vec2> = FIGHTER_HITBOX.iter().map(|&c| pose.to_screen(c)).collect();
        closed_outline(&corners)
    }
}

/// A projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    /// Tip position
    pub pos: Vec2,
    /// Per-frame velocity
    pub vel: Vec2,
    /// Inherited from the firer (drawing only)
    pub rotation: f32,
    pub backward: bool,
    /// Owner's layer; never hits fighters on the same layer
    pub layer: u8,
    /// Set when the bullet strikes a fighter; removed on its next step
    #[serde(default)]
    pub hit: bool,
}

impl Bullet {
    pub fn pose(&self) -> Pose {
        Pose {
            origin: self.pos,
            rotation: self.rotation,
            backward: self.backward,
        }
    }

    /// The path swept during the last step
    pub fn hitbox(&self) -> [Segment; 1] {
        [Segment::new(self.pos, self.pos - self.vel)]
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.x < BULLET_MIN_X
            || self.pos.x > BULLET_MAX_X
            || self.pos.y < BULLET_MIN_Y
            || self.pos.y > BULLET_MAX_Y
    }
}

/// Everything that lives in the frame loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Entity {
    Player(Fighter),
    Enemy(Fighter),
    Bullet(Bullet),
    /// Frame rate and entity count
    FpsHud,
    /// Current controller state
    InputHud,
}

impl Entity {
    pub fn as_fighter(&self) -> Option<&Fighter> {
        match self {
            Entity::Player(f) | Entity::Enemy(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_bullet(&self) -> Option<&Bullet> {
        match self {
            Entity::Bullet(b) => Some(b),
            _ => None,
        }
    }
}

/// Why a bullet left the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Struck a fighter on the previous frame
    Spent,
    /// Flew off screen
    OutOfBounds,
}

/// Events emitted during a tick, for logging and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BulletFired { bullet_id: u32, owner_id: u32 },
    Hit { fighter_id: u32, bullet_id: u32 },
    BulletRemoved { bullet_id: u32, reason: RemovalReason },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Entities in draw order
    pub entities: Vec<Entity>,
    /// Frames simulated so far
    pub frame: u64,
    /// Input applied on the last tick (shown by the input HUD)
    pub input: InputState,
    /// Frames counted in the last full second (shown by the FPS HUD)
    pub fps: u32,
    /// Entity count when the last tick began (shown by the FPS HUD)
    #[serde(default)]
    pub objects_at_step: usize,
    /// Events from the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Player on the left facing right, enemy on the right facing left,
    /// followed by the two HUD entries
    pub fn new() -> Self {
        let mut world = Self::empty();
        let player_id = world.next_entity_id();
        let enemy_id = world.next_entity_id();
        world.entities = vec![
            Entity::Player(Fighter::new(player_id, 30.0, false, PLAYER_LAYER)),
            Entity::Enemy(Fighter::new(enemy_id, 290.0, true, ENEMY_LAYER)),
            Entity::FpsHud,
            Entity::InputHud,
        ];
        world.objects_at_step = world.entities.len();
        world
    }

    /// No entities at all
    pub fn empty() -> Self {
        Self {
            entities: Vec::new(),
            frame: 0,
            input: InputState::default(),
            fps: 0,
            objects_at_step: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn player(&self) -> Option<&Fighter> {
        self.entities.iter().find_map(|e| match e {
            Entity::Player(f) => Some(f),
            _ => None,
        })
    }

    pub fn enemy(&self) -> Option<&Fighter> {
        self.entities.iter().find_map(|e| match e {
            Entity::Enemy(f) => Some(f),
            _ => None,
        })
    }

    pub fn bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.entities.iter().filter_map(Entity::as_bullet)
    }
}
