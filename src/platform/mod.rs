//! Platform abstraction layer
//!
//! Handles the host-facing side of the loop:
//! - Input unification (keyboard latch + gamepad polling)
//! - Frame pacing and FPS measurement

pub mod input;
pub mod time;

pub use input::{DEFAULT_AXIS_THRESHOLD, GamepadSnapshot, KeyboardLatch, button_for_key, unify};
pub use time::{FpsCounter, FrameScheduler};
