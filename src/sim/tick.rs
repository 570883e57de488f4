//! Fixed timestep simulation tick
//!
//! One call advances every entity by one frame, then resolves hits.

use log::debug;

use super::collision::hit_check;
use super::input::InputState;
use super::pilot::enemy_input;
use super::state::{Bullet, Entity, Fighter, GameEvent, RemovalReason, World};
use crate::consts::KNOCKBACK_DIVISOR;

/// Advance the world by one frame
///
/// Entities are stepped in list order. Bullets fired this frame are placed
/// just before their firer and first move on the next frame.
pub fn tick(world: &mut World, input: &InputState) {
    world.frame += 1;
    world.events.clear();
    world.input = *input;

    let entities = std::mem::take(&mut world.entities);
    world.objects_at_step = entities.len();
    let mut survivors = Vec::with_capacity(entities.len() + 2);

    for entity in entities {
        match entity {
            Entity::Player(mut fighter) => {
                if let Some(bullet) = step_fighter(world, &mut fighter, input) {
                    survivors.push(Entity::Bullet(bullet));
                }
                survivors.push(Entity::Player(fighter));
            }
            Entity::Enemy(mut fighter) => {
                let pilot = enemy_input(&fighter);
                if let Some(bullet) = step_fighter(world, &mut fighter, &pilot) {
                    survivors.push(Entity::Bullet(bullet));
                }
                survivors.push(Entity::Enemy(fighter));
            }
            Entity::Bullet(mut bullet) => match step_bullet(&mut bullet) {
                Ok(()) => survivors.push(Entity::Bullet(bullet)),
                Err(reason) => world.events.push(GameEvent::BulletRemoved {
                    bullet_id: bullet.id,
                    reason,
                }),
            },
            hud @ (Entity::FpsHud | Entity::InputHud) => survivors.push(hud),
        }
    }

    world.entities = survivors;
    resolve_hits(world);
}

/// Move a fighter for one frame; returns a bullet if it fired
fn step_fighter(world: &mut World, fighter: &mut Fighter, input: &InputState) -> Option<Bullet> {
    let facing_at_start = fighter.backward;
    fighter.apply_input(input);

    let bullet = if fighter.update_trigger(input.b) {
        let (pos, vel) = fighter.muzzle(facing_at_start);
        let bullet = Bullet {
            id: world.next_entity_id(),
            pos,
            vel,
            rotation: fighter.rotation,
            backward: fighter.backward,
            layer: fighter.layer,
            hit: false,
        };
        fighter.apply_recoil(facing_at_start);
        debug!("fighter {} fired bullet {}", fighter.id, bullet.id);
        world.events.push(GameEvent::BulletFired {
            bullet_id: bullet.id,
            owner_id: fighter.id,
        });
        Some(bullet)
    } else {
        None
    };

    fighter.integrate();
    bullet
}

/// Move a bullet; `Err` means it should be removed
fn step_bullet(bullet: &mut Bullet) -> Result<(), RemovalReason> {
    if bullet.hit {
        return Err(RemovalReason::Spent);
    }

    bullet.pos += bullet.vel;

    if bullet.is_out_of_bounds() {
        return Err(RemovalReason::OutOfBounds);
    }
    Ok(())
}

/// Test every fighter against every opposing bullet
///
/// Hits only nudge velocities, so all tests run against the same poses
/// before any effect is applied.
fn resolve_hits(world: &mut World) {
    let mut hits: Vec<(usize, usize)> = Vec::new();

    for (fi, fighter) in world
        .entities
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.as_fighter().map(|f| (i, f)))
    {
        let body = fighter.hitbox();
        for (bi, bullet) in world
            .entities
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_bullet().map(|b| (i, b)))
        {
            if bullet.layer == fighter.layer {
                continue;
            }
            if hit_check(&body, &bullet.hitbox()) {
                hits.push((fi, bi));
            }
        }
    }

    for (fi, bi) in hits {
        let (bullet_id, knockback) = match &mut world.entities[bi] {
            Entity::Bullet(bullet) => {
                bullet.hit = true;
                (bullet.id, bullet.vel / KNOCKBACK_DIVISOR)
            }
            _ => continue,
        };
        if let Entity::Player(fighter) | Entity::Enemy(fighter) = &mut world.entities[fi] {
            fighter.vel += knockback;
            fighter.hits_taken += 1;
            debug!("bullet {} hit fighter {}", bullet_id, fighter.id);
            world.events.push(GameEvent::Hit {
                fighter_id: fighter.id,
                bullet_id,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{ENEMY_LAYER, PLAYER_LAYER};
    use glam::Vec2;
    use proptest::prelude::*;

    fn fire() -> InputState {
        InputState {
            b: true,
            ..Default::default()
        }
    }

    fn bullet(world: &mut World, pos: Vec2, vel: Vec2, layer: u8) -> Bullet {
        Bullet {
            id: world.next_entity_id(),
            pos,
            vel,
            rotation: 0.0,
            backward: false,
            layer,
            hit: false,
        }
    }

    /// A world holding only a single player-side fighter
    fn lone_player() -> World {
        let mut world = World::empty();
        let id = world.next_entity_id();
        world
            .entities
            .push(Entity::Player(Fighter::new(id, 100.0, false, PLAYER_LAYER)));
        world
    }

    #[test]
    fn test_idle_world_is_stable() {
        let mut world = World::new();
        for _ in 0..60 {
            tick(&mut world, &InputState::default());
        }
        assert_eq!(world.player().unwrap().pos, Vec2::new(30.0, HORIZON_HEIGHT));
        assert_eq!(world.bullets().count(), 0);
        assert_eq!(world.frame, 60);
    }

    #[test]
    fn test_spawned_bullet_precedes_firer() {
        let mut world = lone_player();
        tick(&mut world, &fire());
        assert_eq!(world.entities.len(), 2);
        assert!(matches!(world.entities[0], Entity::Bullet(_)));
        assert!(matches!(world.entities[1], Entity::Player(_)));
        assert!(matches!(
            world.events[0],
            GameEvent::BulletFired { .. }
        ));
    }

    #[test]
    fn test_new_bullet_not_stepped_same_frame() {
        let mut world = lone_player();
        tick(&mut world, &fire());
        let b = world.bullets().next().unwrap();
        // Muzzle sits 10 above the draw centre
        assert!((b.pos - Vec2::new(100.0, HORIZON_HEIGHT - 20.0)).length() < 1e-4);
    }

    #[test]
    fn test_held_fire_bursts_five_every_ten_frames() {
        let mut world = lone_player();
        let mut fired = 0;
        for _ in 0..20 {
            tick(&mut world, &fire());
            fired += world
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::BulletFired { .. }))
                .count();
        }
        assert_eq!(fired, 10);
    }

    #[test]
    fn test_recoil_pushes_against_aim() {
        let mut world = lone_player();
        tick(&mut world, &fire());
        // Facing right, recoil pushes left and slightly up
        let p = world.player().unwrap();
        assert!(p.pos.x < 100.0);
        assert!(p.pos.y < HORIZON_HEIGHT);
    }

    #[test]
    fn test_turning_while_firing_keeps_start_facing() {
        let mut world = lone_player();
        let turn_and_fire = InputState {
            l_left: true,
            b: true,
            ..Default::default()
        };
        tick(&mut world, &turn_and_fire);

        // The shot leaves along the facing the frame began with,
        // while the bullet sprite takes the new facing
        let b = world.bullets().next().unwrap();
        assert!((b.vel - Vec2::new(BULLET_SPEED, 0.0)).length() < 1e-4);
        assert!(b.backward);

        let p = world.player().unwrap();
        assert!(p.backward);
        // Walk nudge (-0.5) plus unmirrored recoil (-2.0), then damping
        assert!((p.vel.x - (-2.5 * HORIZONTAL_DAMPING)).abs() < 1e-4);

        // Next frame the new facing applies
        tick(&mut world, &turn_and_fire);
        let newest = world.bullets().last().unwrap();
        assert!((newest.vel - Vec2::new(-BULLET_SPEED, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_hud_count_is_taken_before_the_step() {
        let mut world = World::new();
        tick(&mut world, &fire());
        assert_eq!(world.entities.len(), 5);
        assert_eq!(world.objects_at_step, 4);
        tick(&mut world, &InputState::default());
        assert_eq!(world.objects_at_step, 5);
    }

    #[test]
    fn test_bullet_removed_on_frame_it_leaves_bounds() {
        let mut world = World::empty();
        let b = bullet(&mut world, Vec2::new(335.0, 100.0), Vec2::new(10.0, 0.0), PLAYER_LAYER);
        world.entities.push(Entity::Bullet(b));
        tick(&mut world, &InputState::default());
        assert_eq!(world.bullets().count(), 0);
        assert!(matches!(
            world.events[0],
            GameEvent::BulletRemoved {
                reason: RemovalReason::OutOfBounds,
                ..
            }
        ));
    }

    #[test]
    fn test_bullet_hits_enemy_and_is_removed_next_frame() {
        let mut world = World::empty();
        let enemy_id = world.next_entity_id();
        let mut enemy = Fighter::new(enemy_id, 200.0, true, ENEMY_LAYER);
        // Park at the station so the autopilot holds still horizontally
        enemy.pos = Vec2::new(250.0, HORIZON_HEIGHT);
        world.entities.push(Entity::Enemy(enemy));
        let b = bullet(
            &mut world,
            Vec2::new(220.0, HORIZON_HEIGHT - 15.0),
            Vec2::new(30.0, 0.0),
            PLAYER_LAYER,
        );
        world.entities.push(Entity::Bullet(b));

        tick(&mut world, &InputState::default());
        assert!(world.events.iter().any(|e| matches!(
            e,
            GameEvent::Hit { fighter_id, .. } if *fighter_id == enemy_id
        )));
        let enemy = world.enemy().unwrap();
        assert_eq!(enemy.hits_taken, 1);
        assert!(world.bullets().next().unwrap().hit);

        tick(&mut world, &InputState::default());
        assert_eq!(world.bullets().count(), 0);
        assert!(world.events.iter().any(|e| matches!(
            e,
            GameEvent::BulletRemoved {
                reason: RemovalReason::Spent,
                ..
            }
        )));
    }

    #[test]
    fn test_knockback_is_tenth_of_bullet_velocity() {
        let mut world = lone_player();
        let b = bullet(
            &mut world,
            Vec2::new(80.0, HORIZON_HEIGHT - 15.0),
            Vec2::new(30.0, 0.0),
            ENEMY_LAYER,
        );
        world.entities.push(Entity::Bullet(b));
        tick(&mut world, &InputState::default());
        let p = world.player().unwrap();
        assert_eq!(p.hits_taken, 1);
        assert!((p.vel.x - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_bullet_ignores_own_layer() {
        let mut world = lone_player();
        let b = bullet(
            &mut world,
            Vec2::new(80.0, HORIZON_HEIGHT - 15.0),
            Vec2::new(30.0, 0.0),
            PLAYER_LAYER,
        );
        world.entities.push(Entity::Bullet(b));
        tick(&mut world, &InputState::default());
        assert_eq!(world.player().unwrap().hits_taken, 0);
        assert!(!world.bullets().next().unwrap().hit);
    }

    #[test]
    fn test_hud_entries_survive() {
        let mut world = World::new();
        tick(&mut world, &InputState::default());
        assert!(world.entities.iter().any(|e| matches!(e, Entity::FpsHud)));
        assert!(world.entities.iter().any(|e| matches!(e, Entity::InputHud)));
    }

    #[test]
    fn test_enemy_climbs_toward_station() {
        let mut world = World::new();
        for _ in 0..10 {
            tick(&mut world, &InputState::default());
        }
        let enemy = world.enemy().unwrap();
        assert!(enemy.pos.y < HORIZON_HEIGHT);
        assert!(enemy.pos.x < 290.0);
    }

    fn arb_input() -> impl Strategy<Value = InputState> {
        prop::collection::vec(any::<bool>(), 10).prop_map(|f| InputState {
            l_left: f[0],
            l_right: f[1],
            l_top: f[2],
            l_bottom: f[3],
            r_left: f[4],
            r_right: f[5],
            r_top: f[6],
            r_bottom: f[7],
            a: f[8],
            b: f[9],
        })
    }

    proptest! {
        #[test]
        fn rotation_stays_clamped(inputs in prop::collection::vec(arb_input(), 1..80)) {
            let mut world = World::new();
            for input in &inputs {
                tick(&mut world, input);
                let p = world.player().unwrap();
                prop_assert!(p.rotation >= -AIM_LIMIT && p.rotation <= AIM_LIMIT);
            }
        }

        #[test]
        fn no_friendly_fire(inputs in prop::collection::vec(arb_input(), 1..60)) {
            let mut world = World::new();
            for input in &inputs {
                tick(&mut world, input);
                // The enemy never fires, so the player can never be hit
                prop_assert_eq!(world.player().unwrap().hits_taken, 0);
                for event in &world.events {
                    if let GameEvent::Hit { fighter_id, .. } = event {
                        prop_assert_eq!(Some(*fighter_id), world.enemy().map(|e| e.id));
                    }
                }
            }
        }

        #[test]
        fn bullets_never_linger_out_of_bounds(inputs in prop::collection::vec(arb_input(), 1..80)) {
            let mut world = World::new();
            for input in &inputs {
                tick(&mut world, input);
                for b in world.bullets() {
                    // Fresh bullets sit at the muzzle; all others are in bounds
                    let fresh = world.events.iter().any(|e| matches!(
                        e,
                        GameEvent::BulletFired { bullet_id, .. } if *bullet_id == b.id
                    ));
                    prop_assert!(!b.is_out_of_bounds() || fresh);
                }
            }
        }
    }
}
