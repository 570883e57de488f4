//! Frame pacing and FPS measurement

use std::time::Duration;

/// Fixed-interval frame scheduler
///
/// Each frame is given `interval`; whatever the frame did not use is
/// returned as the delay before the next one. Overruns are counted but never
/// caught up.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    last_cost: Duration,
    frames: u64,
    overruns: u64,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_cost: Duration::ZERO,
            frames: 0,
            overruns: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Record a finished frame; returns how long to wait before the next one
    pub fn finish_frame(&mut self, cost: Duration) -> Duration {
        self.frames += 1;
        self.last_cost = cost;
        if cost >= self.interval {
            self.overruns += 1;
        }
        self.interval.saturating_sub(cost)
    }

    pub fn last_cost(&self) -> Duration {
        self.last_cost
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames that used their whole budget or more
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}

/// Frames counted per wall-clock window of a little over one second
///
/// Times are offsets from any fixed start (e.g. `Instant::elapsed`).
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Duration,
    count: u32,
    shown: u32,
}

impl FpsCounter {
    const WINDOW: Duration = Duration::from_millis(1000);

    pub fn new(now: Duration) -> Self {
        Self {
            window_start: now,
            count: 0,
            shown: 0,
        }
    }

    /// Call at the start of each frame
    pub fn frame(&mut self, now: Duration) {
        if now.saturating_sub(self.window_start) > Self::WINDOW {
            self.shown = self.count;
            self.count = 1;
            self.window_start = now;
        } else {
            self.count += 1;
        }
    }

    /// Count from the last completed window
    pub fn shown(&self) -> u32 {
        self.shown
    }
}
