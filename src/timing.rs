use std::thread;
use std::time::{Duration, Instant};

/// Banks frame time and pays it out in whole simulation ticks.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickAccumulator {
    budget_ms: f64,
}

impl TickAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, dt: Duration) {
        self.budget_ms += dt.as_secs_f64() * 1000.0;
    }

    /// Take one tick's worth of time if the budget covers `delay_ms`.
    /// The delay is passed per call since eating can shorten it mid-frame.
    pub fn take_tick(&mut self, delay_ms: u32) -> bool {
        let delay = f64::from(delay_ms.max(1));
        if self.budget_ms >= delay {
            self.budget_ms -= delay;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.budget_ms = 0.0;
    }
}

/// Caps the frame rate by sleeping out the rest of each frame interval.
#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame
            .saturating_sub(now.saturating_duration_since(self.frame_start))
    }

    /// Block until the current frame interval is used up, then start the next.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}
