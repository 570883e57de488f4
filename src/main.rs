//! Robo Duel entry point
//!
//! Runs the frame loop headless: a seeded scripted pilot stands in for the
//! human, the display list is built every frame, and a summary is logged
//! once per second.
//!
//! Usage: `robo-duel [settings.json]`

use std::thread;
use std::time::Instant;

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use robo_duel::Settings;
use robo_duel::platform::{FpsCounter, FrameScheduler, GamepadSnapshot, KeyboardLatch, unify};
use robo_duel::renderer::render;
use robo_duel::sim::{GameEvent, World, tick};

/// Keys the scripted pilot may hold
const PILOT_KEYS: [&str; 7] = [
    "KeyA",
    "KeyD",
    "KeyW",
    "ArrowUp",
    "ArrowDown",
    "ArrowRight",
    "ShiftLeft",
];

/// Presses and releases keys at random, like a restless player
struct ScriptedPilot {
    rng: Pcg32,
    keyboard: KeyboardLatch,
}

impl ScriptedPilot {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            keyboard: KeyboardLatch::new(),
        }
    }

    /// Toggle a key now and then; sometimes also nudge the virtual gamepad
    fn poll(&mut self) -> (&KeyboardLatch, Option<GamepadSnapshot>) {
        if self.rng.random_bool(0.2) {
            let key = PILOT_KEYS[self.rng.random_range(0..PILOT_KEYS.len())];
            if self.rng.random_bool(0.5) {
                self.keyboard.key_down(key);
            } else {
                self.keyboard.key_up(key);
            }
        }
        let pad = self.rng.random_bool(0.1).then(|| GamepadSnapshot {
            axes: (0..4).map(|_| self.rng.random_range(-1.0..1.0)).collect(),
            buttons: vec![self.rng.random_bool(0.3), false],
        });
        (&self.keyboard, pad)
    }
}

fn load_settings() -> Settings {
    match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::warn!("Could not load settings from {path}: {e}; using defaults");
            Settings::default()
        }),
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Robo Duel (headless) starting...");

    let settings = load_settings();
    let mut world = World::new();
    let mut pilot = ScriptedPilot::new(settings.demo_seed);
    let mut scheduler = FrameScheduler::new(settings.frame_interval());
    log::info!(
        "Running {} frames at {:?} per frame",
        settings.demo_frames,
        scheduler.interval()
    );
    let started = Instant::now();
    let mut fps = FpsCounter::new(started.elapsed());
    let mut hits = 0u64;
    let mut last_report_fps = None;

    for _ in 0..settings.demo_frames {
        let begin = Instant::now();
        fps.frame(started.elapsed());
        world.fps = fps.shown();

        let (keyboard, pad) = pilot.poll();
        let input = unify(keyboard, pad.as_ref(), settings.axis_threshold);
        tick(&mut world, &input);

        for event in &world.events {
            if let GameEvent::Hit {
                fighter_id,
                bullet_id,
            } = event
            {
                hits += 1;
                log::info!("frame {}: bullet {bullet_id} hit fighter {fighter_id}", world.frame);
            }
        }

        let commands = render(&world, &settings);
        log::trace!("frame {}: {} draw commands", world.frame, commands.len());

        if last_report_fps != Some(fps.shown()) || world.frame % 30 == 0 {
            last_report_fps = Some(fps.shown());
            log::info!(
                "frame {} fps {} entities {} bullets {} controller {}",
                world.frame,
                fps.shown(),
                world.entities.len(),
                world.bullets().count(),
                input.hud_label()
            );
        }

        let delay = scheduler.finish_frame(begin.elapsed());
        thread::sleep(delay);
    }

    log::info!(
        "Done: {} frames, {} hits, {} overruns",
        scheduler.frames(),
        hits,
        scheduler.overruns()
    );
    match serde_json::to_string(&world) {
        Ok(json) => log::debug!("final world: {json}"),
        Err(e) => log::warn!("could not serialize world: {e}"),
    }
}
